fn main() {
    best_hand::cli::run();
}

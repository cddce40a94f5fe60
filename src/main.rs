fn main() {
    verdict::cli::run();
}

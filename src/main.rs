fn main() {
    kyomu::app::cli::run();
}

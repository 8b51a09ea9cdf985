fn main() {
    browserhistory::cli::run();
}

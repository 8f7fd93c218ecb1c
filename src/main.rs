fn main() {
    doc_cookies::cli::run();
}

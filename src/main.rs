fn main() {
    addon_publish::app::cli::run();
}

fn main() {
    pit_maint::app::cli::run();
}

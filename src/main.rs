fn main() {
    if catalog_export_lib::run().is_err() {
        std::process::exit(1);
    }
}

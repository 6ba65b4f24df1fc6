fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    graph_sketch::run_app()
}

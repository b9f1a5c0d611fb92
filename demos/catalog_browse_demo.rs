use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    catalog::example_apps::run_browse_demo(std::env::args().skip(1))
}

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    catalog::example_apps::run_admin_demo(std::env::args().skip(1))
}

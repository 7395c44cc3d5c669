fn main() {
    if let Err(e) = micac_drv::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

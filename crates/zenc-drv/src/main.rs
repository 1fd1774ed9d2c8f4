use zenc_drv::DriverError;

fn main() {
    if let Err(err) = zenc_drv::main() {
        eprintln!("error: {err}");
        let code = err
            .downcast_ref::<DriverError>()
            .map(DriverError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

use once_cell::sync::OnceCell;

static INIT: OnceCell<()> = OnceCell::new();

/// Initializes the logging system from the default file `log4rs.yaml` in the
/// working directory. Prefer `init_in` for programmatic control.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    INIT.get_or_init(|| {
        let _ = log4rs::init_file("log4rs.yaml", log4rs::config::Deserializers::default());
    });
    Ok(())
}

/// Initializes logging to `{base_dir}/{name}_logs/{name}.log`.
/// Creates the folder if missing. Repeated calls are no-ops.
///
/// # Errors
/// Returns an error if the directory cannot be created or the logger fails to
/// initialize.
pub fn init_in(
    base_dir: &std::path::Path,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    use log::LevelFilter;
    use log4rs::append::file::FileAppender;
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    if INIT.get().is_some() {
        return Ok(());
    }
    let dir = base_dir.join(format!("{name}_logs"));
    std::fs::create_dir_all(&dir)?;
    let encoder =
        Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}"));
    let appender = FileAppender::builder().encoder(encoder).build(dir.join(format!("{name}.log")))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    let _ = INIT.set(());
    Ok(())
}

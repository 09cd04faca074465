use envbind::{record, EnvFileSource, RawSource, TomlFileSource};

record! {
    #[derive(Debug, Default)]
    struct AppSection {
        #[bind("app_name,required")]
        name: String,
        #[bind(",default=false")]
        debug: bool,
    }
}

record! {
    #[derive(Debug, Default)]
    struct DatabaseSection {
        host: String,
        #[bind(",default=5432")]
        port: u16,
    }
}

record! {
    #[derive(Debug, Default)]
    struct AppConfig {
        app: AppSection,
        database: DatabaseSection,
    }
}

fn main() -> Result<(), envbind::Error> {
    // Flat env file: APP settings only.
    let mut app = AppSection::default();
    EnvFileSource::new("demos/app.env", true).load_into(&mut app)?;
    println!("App: {} (debug={})", app.name, app.debug);

    // TOML keeps sections, which bind onto nested records.
    let mut config = AppConfig::default();
    TomlFileSource::new("demos/app.toml", true).load_into(&mut config)?;
    println!(
        "{} database: {}:{}",
        config.app.name, config.database.host, config.database.port
    );

    Ok(())
}

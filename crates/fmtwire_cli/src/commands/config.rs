//! Config command implementation

use miette::{Result, miette};

use fmtwire_core::templates::ConfigTarget;

pub fn run_config(target: Option<&str>, list: bool) -> Result<()> {
    if list {
        for target in ConfigTarget::ALL {
            println!("{}", target.name());
        }
        return Ok(());
    }

    let Some(name) = target else {
        return Err(miette!("Must provide a template name or --list"));
    };

    let target = ConfigTarget::from_name(name).ok_or_else(|| {
        miette!("Unknown template '{name}'. Use --list to see available templates")
    })?;

    print!("{}", target.source());
    Ok(())
}

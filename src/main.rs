use clap::Parser;
use resbind::utils::{logger, validation::Validate};
use resbind::{
    check_safe, resources, sort_by_canonical_form, BindError, BindMode, Binder, BinderConfig,
    CliConfig, Registry, Resource,
};
use std::collections::BTreeMap;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => match BinderConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(2);
            }
        },
        None => BinderConfig::default(),
    };

    let verbose = cli.verbose || config.verbose();
    if config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let format = cli
        .format
        .clone()
        .unwrap_or_else(|| config.output_format().to_string());

    let result = resources::builtin_registry(Binder::from_config(&config)).and_then(|registry| {
        match &cli.kind {
            Some(kind) => inspect(&registry, kind, cli.mode, &format),
            None => list_kinds(&registry),
        }
    });

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            let exit_code = if e.is_declaration_defect() { 1 } else { 2 };
            std::process::exit(exit_code);
        }
    }
}

fn list_kinds(registry: &Registry) -> resbind::Result<String> {
    let mut handles: Vec<Rc<dyn Resource>> = Vec::new();
    for kind in registry.kinds() {
        handles.push(Rc::from(registry.new_resource(kind)?));
    }

    let lines: Vec<String> = sort_by_canonical_form(&handles)
        .iter()
        .map(|res| format!("{}\t{}", res.kind(), res.shape().name))
        .collect();
    Ok(lines.join("\n"))
}

fn inspect(
    registry: &Registry,
    kind: &str,
    mode: BindMode,
    format: &str,
) -> resbind::Result<String> {
    let table: BTreeMap<String, String> = match mode {
        BindMode::Names => registry.lang_field_names(kind)?.into_iter().collect(),
        BindMode::Tags => registry.tag_field_names(kind)?.into_iter().collect(),
        BindMode::Types => registry
            .lang_field_types(kind)?
            .into_iter()
            .map(|(name, ty)| (name, ty.to_string()))
            .collect(),
        BindMode::Check => {
            let res = registry.new_resource(kind)?;
            check_safe(&res.shape())?;
            BTreeMap::from([("safe".to_string(), "true".to_string())])
        }
    };

    render(&table, format)
}

fn render(table: &BTreeMap<String, String>, format: &str) -> resbind::Result<String> {
    match format {
        "toml" => toml::to_string(table).map_err(|e| BindError::ConfigError {
            message: format!("TOML output failed: {}", e),
        }),
        _ => Ok(serde_json::to_string_pretty(table)?),
    }
}

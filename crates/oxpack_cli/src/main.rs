mod args;

use std::{fs, process::ExitCode, sync::Arc, time::Instant};

use ansi_term::Colour;
use anyhow::Context;
use clap::Parser;

use args::{CompilerArgs, FilterArgs, InputArgs};
use oxpack_common::{CompilerOptions, Loader};
use oxpack_plugin::{PluginContext, PluginDriver};
use oxpack_plugin_transform::{TransformPlugin, TransformPluginOptions};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  filter: FilterArgs,

  #[clap(flatten)]
  compiler: CompilerArgs,
}

fn parse_loader_overrides(specs: &[String]) -> anyhow::Result<Vec<(String, Option<Loader>)>> {
  let mut overrides = Vec::with_capacity(specs.len());

  for spec in specs {
    let (extension, name) = spec
      .split_once('=')
      .with_context(|| format!("Invalid loader \"{spec}\", expected \"ext=name\"."))?;
    let extension =
      if extension.starts_with('.') { extension.to_string() } else { format!(".{extension}") };
    let loader = if name.is_empty() {
      None
    } else {
      Some(name.parse::<Loader>().map_err(|error| anyhow::anyhow!(error))?)
    };
    overrides.push((extension, loader));
  }

  Ok(overrides)
}

async fn run(commands: Commands) -> anyhow::Result<()> {
  let compiler = CompilerOptions {
    target: commands.compiler.target.unwrap_or_default(),
    minify: commands.compiler.minify,
    sourcemap: commands.compiler.sourcemap,
    keep_names: commands.compiler.keep_names,
  };

  let plugin = TransformPlugin::new(TransformPluginOptions {
    include: commands.filter.include,
    exclude: commands.filter.exclude,
    loaders: parse_loader_overrides(&commands.filter.loader)?,
    compiler,
  });

  let cwd = match commands.input.cwd {
    Some(cwd) => cwd,
    None => std::env::current_dir()?,
  };
  let ctx = Arc::new(PluginContext::new(cwd));
  let driver = PluginDriver::new(vec![Arc::new(plugin)], Arc::clone(&ctx));

  if let Some(out_dir) = &commands.compiler.out_dir {
    fs::create_dir_all(out_dir)
      .with_context(|| format!("Failed to create {}", out_dir.display()))?;
  }

  let dim = Colour::White.dimmed();
  let start = Instant::now();

  for input in &commands.input.inputs {
    let source = fs::read_to_string(input)
      .with_context(|| format!("Failed to read {}", input.display()))?;
    let id = input.to_string_lossy().into_owned();

    let (code, map) =
      driver.transform(&id, source).await.map_err(|errors| anyhow::anyhow!("{errors}"))?;

    for warning in ctx.take_warnings() {
      eprintln!("{}", Colour::Yellow.paint(warning));
    }

    match &commands.compiler.out_dir {
      Some(out_dir) => {
        let stem = input.file_stem().map_or_else(|| "out".into(), |stem| stem.to_string_lossy());
        let out_file = out_dir.join(format!("{stem}.js"));
        fs::write(&out_file, &code)
          .with_context(|| format!("Failed to write {}", out_file.display()))?;

        if let Some(map) = map {
          let map_file = out_dir.join(format!("{stem}.js.map"));
          fs::write(&map_file, map.to_json_string())
            .with_context(|| format!("Failed to write {}", map_file.display()))?;
        }

        println!(
          "{} {} {}",
          Colour::Cyan.paint(out_file.display().to_string()),
          dim.paint(format!("{:.2} kB", code.len() as f64 / 1024.0)),
          dim.paint(format!("← {}", input.display())),
        );
      }
      None => print!("{code}"),
    }
  }

  eprintln!("{}", dim.paint(format!("Finished in {}ms", start.elapsed().as_millis())));
  Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
  let commands = Commands::parse();
  match run(commands).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      eprintln!("{} {error:?}", Colour::Red.paint("error:"));
      ExitCode::FAILURE
    }
  }
}

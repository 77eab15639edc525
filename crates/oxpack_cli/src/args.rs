use std::path::PathBuf;

use clap::Args;

use oxpack_common::EsTarget;

#[derive(Args)]
pub struct InputArgs {
  /// Source files to transform.
  #[clap(required = true)]
  pub inputs: Vec<PathBuf>,

  #[clap(long)]
  pub cwd: Option<PathBuf>,
}

#[derive(Args)]
pub struct FilterArgs {
  #[clap(long, action = clap::ArgAction::Append)]
  pub include: Vec<String>,

  #[clap(long, action = clap::ArgAction::Append)]
  pub exclude: Vec<String>,

  /// Loader override as `ext=name`, e.g. `--loader .mjs=ts`. An empty name
  /// (`--loader .jsx=`) disables the extension.
  #[clap(long, action = clap::ArgAction::Append)]
  pub loader: Vec<String>,
}

#[derive(Args)]
pub struct CompilerArgs {
  #[clap(long, short = 'm')]
  pub minify: bool,

  #[clap(long)]
  pub target: Option<EsTarget>,

  #[clap(long)]
  pub sourcemap: bool,

  #[clap(long)]
  pub keep_names: bool,

  #[clap(long, short = 'd')]
  pub out_dir: Option<PathBuf>,
}

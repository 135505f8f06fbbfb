use std::{
  cell::Cell,
  path::PathBuf,
  rc::Rc,
};

use anyhow::{
  Context,
  Result,
};
use clap::{
  ArgAction,
  Parser,
};
use the_chain::{
  Chainable,
  Handler,
  Link,
};
use the_command::{
  Command,
  CommandHistory,
};
use the_config::{
  Config,
  build_plugin_manager,
};
use the_plugin::{
  FnPlugin,
  Plugin,
};

#[derive(Parser, Debug)]
#[command(name = "the-test", about, long_about = None)]
struct Cli {
  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  verbosity: u8,

  /// Load configuration from a specific file
  #[arg(short = 'c', long = "config", value_name = "FILE")]
  config_file: Option<PathBuf>,
}

#[derive(Default)]
struct Light {
  on: Cell<bool>,
}

struct Switch {
  light: Rc<Light>,
  on:    bool,
}

impl Command for Switch {
  fn execute(&mut self) -> bool {
    self.light.on.set(self.on);
    true
  }

  fn name(&self) -> &str {
    if self.on { "turn on" } else { "turn off" }
  }
}

#[derive(Debug, Default)]
struct Data {
  prop: i32,
}

struct Clamp {
  max: i32,
}

impl Handler<Data> for Clamp {
  fn is_processable(&self, data: &Data) -> bool {
    data.prop > self.max
  }

  fn handle(&mut self, data: &mut Data) {
    data.prop = self.max;
  }
}

fn run_commands() {
  let light = Rc::new(Light::default());
  let mut history: CommandHistory<Box<dyn Command>> = CommandHistory::new();

  for on in [true, false, true] {
    let mut switch = Switch {
      light: light.clone(),
      on,
    };
    let ok = switch.execute();
    println!("command: {} -> {ok} (light on: {})", switch.name(), light.on.get());
    history.push(Box::new(switch));
  }

  while let Some(command) = history.pop() {
    println!("history: popped {}", command.name());
  }
}

fn run_plugins(config: &Config) {
  let plugins: Vec<Box<dyn Plugin<Data>>> = vec![
    Box::new(FnPlugin::new("add one", |data: &mut Data| data.prop += 1)),
    Box::new(FnPlugin::new("add two", |data: &mut Data| data.prop += 2)),
  ];
  let mut manager = build_plugin_manager(config, plugins);

  let mut data = Data::default();
  manager.execute(&mut data);
  println!("plugins: {manager:?} -> {data:?}");

  manager.deregister("add one");
  manager.execute(&mut data);
  println!("plugins: {manager:?} -> {data:?}");
}

fn run_chain() {
  let mut chain = Link::from_fn(|data: &Data| data.prop < 0, |data: &mut Data| data.prop = 0)
    .with_next(Link::new(Clamp { max: 10 }));

  for prop in [-3, 4, 42] {
    let mut data = Data { prop };
    chain.process(&mut data);
    println!("chain: {prop} -> {}", data.prop);
  }
}

fn init_logging(verbosity: u8) {
  let level = match verbosity {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };

  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbosity);

  let config = match &cli.config_file {
    Some(path) => {
      Config::load(path).with_context(|| format!("loading {}", path.display()))?
    },
    None => Config::default(),
  };

  run_commands();
  run_plugins(&config);
  run_chain();

  Ok(())
}

//! Runtime configuration: defaults, then `SNAKE_*` environment variables, then
//! command-line flags.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::types::Difficulty;

pub const USAGE: &str = "\
usage: tui-snake [options]

options:
  --difficulty <name>  easy | medium | hard | extreme   (SNAKE_DIFFICULTY)
  --scores-dir <dir>   where snake_high_scores.json lives (SNAKE_SCORES_DIR)
  --seed <n>           fixed food placement seed          (SNAKE_SEED)
  --mute               no terminal bell on eat/game over  (SNAKE_MUTE=1)
  --no-save            keep high scores in memory only
  --log <path>         write tracing output to a file     (SNAKE_LOG_PATH)
  -h, --help           show this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub difficulty: Difficulty,
    pub scores_dir: PathBuf,
    /// `None` means a random seed per run.
    pub seed: Option<u32>,
    pub mute: bool,
    pub save: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            scores_dir: default_scores_dir(std::env::var_os("HOME").map(PathBuf::from)),
            seed: None,
            mute: false,
            save: true,
            log_path: None,
        }
    }
}

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Config),
    Help,
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `SNAKE_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = var("SNAKE_DIFFICULTY") {
            config.difficulty = parse_difficulty(&v).context("SNAKE_DIFFICULTY")?;
        }
        if let Some(v) = var("SNAKE_SCORES_DIR") {
            config.scores_dir = PathBuf::from(v);
        }
        if let Some(v) = var("SNAKE_SEED") {
            config.seed = Some(parse_seed(&v).context("SNAKE_SEED")?);
        }
        if let Some(v) = var("SNAKE_MUTE") {
            config.mute = parse_flag(&v).context("SNAKE_MUTE")?;
        }
        config.log_path = var("SNAKE_LOG_PATH").map(PathBuf::from);

        Ok(config)
    }

    /// Apply command-line flags (without the program name) on top of `self`.
    pub fn with_args(mut self, args: &[String]) -> Result<Command> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--difficulty" => {
                    self.difficulty = parse_difficulty(value_for(args, &mut i, "--difficulty")?)?;
                }
                "--scores-dir" => {
                    self.scores_dir = PathBuf::from(value_for(args, &mut i, "--scores-dir")?);
                }
                "--seed" => {
                    self.seed = Some(parse_seed(value_for(args, &mut i, "--seed")?)?);
                }
                "--log" => {
                    self.log_path = Some(PathBuf::from(value_for(args, &mut i, "--log")?));
                }
                "--mute" => self.mute = true,
                "--no-save" => self.save = false,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(Command::Play(self))
    }
}

/// Environment, then the process arguments.
pub fn load() -> Result<Command> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    Config::from_env()?.with_args(&args)
}

fn default_scores_dir(home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) if !home.as_os_str().is_empty() => home.join(".tui-snake"),
        _ => PathBuf::from("."),
    }
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_difficulty(v: &str) -> Result<Difficulty> {
    Difficulty::from_str(v).ok_or_else(|| anyhow!("invalid difficulty: {}", v))
}

fn parse_seed(v: &str) -> Result<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("invalid seed: {}", v))
}

fn parse_flag(v: &str) -> Result<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("invalid boolean: {}", v)),
    }
}

use clap::Args;
use fitment::config::AppConfig;
use fitment::error::{AppError, InputError};
use fitment::geometry::{DisplayProfile, GlassGeometry, ScreenGeometry, UniversalRule};
use fitment::shortlist::{shortlist, GlassCandidate};
use fitment::CompatibilityEngine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct GlassMatchArgs {
    /// Screen geometry JSON file
    #[arg(long)]
    pub(crate) screen: PathBuf,
    /// Glass geometry JSON file
    #[arg(long)]
    pub(crate) glass: PathBuf,
    /// Optional universal rule JSON file
    #[arg(long)]
    pub(crate) rule: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DisplayMatchArgs {
    /// Display profile of the device being repaired
    #[arg(long)]
    pub(crate) target: PathBuf,
    /// Display profile of the donor panel
    #[arg(long)]
    pub(crate) donor: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ShortlistArgs {
    /// Screen geometry JSON file
    #[arg(long)]
    pub(crate) screen: PathBuf,
    /// JSON array of glass candidates
    #[arg(long)]
    pub(crate) candidates: PathBuf,
}

pub(crate) fn run_glass_match(args: GlassMatchArgs) -> Result<(), AppError> {
    let engine = engine()?;
    let screen: ScreenGeometry = read_json(&args.screen)?;
    let glass: GlassGeometry = read_json(&args.glass)?;
    let rule: Option<UniversalRule> = args.rule.as_deref().map(read_json).transpose()?;

    print_json(&engine.match_glass(&screen, &glass, rule.as_ref()))
}

pub(crate) fn run_display_match(args: DisplayMatchArgs) -> Result<(), AppError> {
    let engine = engine()?;
    let target: DisplayProfile = read_json(&args.target)?;
    let donor: DisplayProfile = read_json(&args.donor)?;

    print_json(&engine.match_display(&target, &donor))
}

pub(crate) fn run_shortlist(args: ShortlistArgs) -> Result<(), AppError> {
    let engine = engine()?;
    let screen: ScreenGeometry = read_json(&args.screen)?;
    let candidates: Vec<GlassCandidate> = read_json(&args.candidates)?;

    print_json(&shortlist(&engine, &screen, candidates))
}

fn engine() -> Result<CompatibilityEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(CompatibilityEngine::new(config.engine))
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Json {
        origin: path.display().to_string(),
        source,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(|source| InputError::Json {
        origin: "result".to_string(),
        source,
    })?;
    println!("{rendered}");
    Ok(())
}

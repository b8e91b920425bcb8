use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Error};
use log::*;
use serde::{Deserialize, Serialize};

use crate::menu::Menu;

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Config {
    pub menu: MenuStore,
}

/// Where the menu document lives on disk.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct MenuStore {
    pub path: PathBuf,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl MenuStore {
    pub fn load(&self) -> Result<Menu, Error> {
        debug!("Load menu from {:?}", self.path);
        let file = File::open(&self.path)
            .with_context(|| format!("open menu document {:?}", self.path))?;
        let menu = serde_json::from_reader(file)
            .with_context(|| format!("parse menu document {:?}", self.path))?;
        Ok(menu)
    }

    pub fn store(&self, menu: &Menu) -> Result<(), Error> {
        debug!("Store menu to {:?}", self.path);
        let file = File::create(&self.path)
            .with_context(|| format!("create menu document {:?}", self.path))?;
        serde_json::to_writer_pretty(file, menu)
            .with_context(|| format!("write menu document {:?}", self.path))?;
        Ok(())
    }
}

#[derive(Deserialize, Debug)]
pub struct EnvLogger {
    level: Option<LogLevel>,
    #[serde(default)]
    modules: HashMap<String, LogLevel>,
    #[serde(default)]
    timestamp_nanos: bool,
}

impl LogLevel {
    fn to_filter(&self) -> log::LevelFilter {
        match self {
            &LogLevel::Off => log::LevelFilter::Off,
            &LogLevel::Error => log::LevelFilter::Error,
            &LogLevel::Warn => log::LevelFilter::Warn,
            &LogLevel::Info => log::LevelFilter::Info,
            &LogLevel::Debug => log::LevelFilter::Debug,
            &LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl EnvLogger {
    pub fn builder(&self) -> env_logger::Builder {
        let mut b = env_logger::Builder::from_default_env();
        if let Some(level) = self.level.as_ref() {
            b.filter_level(level.to_filter());
        }

        for (module, level) in self.modules.iter() {
            b.filter_module(&module, level.to_filter());
        }

        if self.timestamp_nanos {
            b.format_timestamp_nanos();
        }

        return b;
    }
}

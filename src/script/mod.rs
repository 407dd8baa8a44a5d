//! Serialize an argument vector into a shell line and a script file.

pub mod batch;
pub mod posix;
pub mod powershell;

use serde::Deserialize;

/// Target shell of the generated downloader script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
pub enum ScriptDialect {
    #[serde(rename = "sh")]
    #[value(name = "sh")]
    PosixShell,
    #[serde(rename = "bat")]
    #[value(name = "bat")]
    WindowsBatch,
    #[serde(rename = "ps1")]
    #[value(name = "ps1")]
    WindowsPowerShell,
}

impl ScriptDialect {
    /// `bat` on Windows hosts, `sh` everywhere else.
    pub const fn host_default() -> Self {
        if cfg!(windows) {
            ScriptDialect::WindowsBatch
        } else {
            ScriptDialect::PosixShell
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ScriptDialect::PosixShell => "sh",
            ScriptDialect::WindowsBatch => "bat",
            ScriptDialect::WindowsPowerShell => "ps1",
        }
    }

    /// Whether the written script gets the user-executable bit.
    pub fn is_executable(self) -> bool {
        matches!(self, ScriptDialect::PosixShell)
    }

    /// Join `args` into one line the dialect re-parses into the same vector.
    pub fn join<S: AsRef<str>>(self, args: &[S]) -> String {
        let quote: fn(&str) -> String = match self {
            ScriptDialect::PosixShell => posix::quote,
            ScriptDialect::WindowsBatch => batch::quote,
            ScriptDialect::WindowsPowerShell => powershell::quote,
        };
        args.iter()
            .map(|arg| quote(arg.as_ref()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full script file contents running `args`.
    pub fn render<S: AsRef<str>>(self, args: &[S]) -> String {
        let line = self.join(args);
        match self {
            ScriptDialect::PosixShell => format!("#!/bin/sh\n{line}\n"),
            ScriptDialect::WindowsBatch => format!("@echo off\n{}\n", batch::escape_percent(&line)),
            ScriptDialect::WindowsPowerShell => format!("# PowerShell script\n{line}\n"),
        }
    }
}

impl Default for ScriptDialect {
    fn default() -> Self {
        Self::host_default()
    }
}

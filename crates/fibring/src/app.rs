//! Application entry point and dispatch.

use std::fmt::Display;
use std::num::Wrapping;
use std::time::Instant;

use anyhow::Result;
use num_bigint::BigUint;
use tracing::{debug, info, warn};

use fibring_core::{fibonacci_in, BigModRing, Integers, ModRing, Native, Ring};

use crate::config::{AppConfig, RingKind};
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "fibring", &mut std::io::stdout());
        return Ok(());
    }

    let start = Instant::now();
    let value = evaluate(config)?;
    info!(
        n = %config.n,
        ring = ?config.ring,
        elapsed = ?start.elapsed(),
        "computed"
    );

    if config.quiet {
        println!("{value}");
    } else {
        println!("{} = {value}", label(config));
    }
    Ok(())
}

/// Compute F(n) in the configured ring and render it.
pub fn evaluate(config: &AppConfig) -> Result<String, AppError> {
    if config.ring != RingKind::Mod && config.modulus.is_some() {
        warn!("--modulus is ignored unless --ring mod is selected");
    }

    let value = match config.ring {
        RingKind::Int => render(config, &Integers::new()),
        RingKind::Wrapping => render(config, &Native::<Wrapping<u64>>::new()),
        RingKind::Float => render(config, &Native::<f64>::new()),
        RingKind::Mod => {
            let modulus = config.modulus.as_ref().ok_or(AppError::MissingModulus)?;
            match u64::try_from(modulus) {
                Ok(m) => render(config, &ModRing::new(m)?),
                Err(_) => render(config, &BigModRing::new(modulus.clone())?),
            }
        }
    };
    Ok(value)
}

fn render<R>(config: &AppConfig, ring: &R) -> String
where
    R: Ring + std::fmt::Debug,
    R::Element: DisplayElement,
{
    debug!(?ring, "selected ring");
    fibonacci_in(config.n.clone(), ring).display()
}

fn label(config: &AppConfig) -> String {
    match (&config.ring, &config.modulus) {
        (RingKind::Mod, Some(m)) => format!("F({}) mod {m}", config.n),
        _ => format!("F({})", config.n),
    }
}

/// Text form of a ring element.
trait DisplayElement {
    fn display(&self) -> String;
}

impl<T: Display> DisplayElement for Wrapping<T> {
    fn display(&self) -> String {
        self.0.to_string()
    }
}

macro_rules! display_element {
    ($($t:ty),*) => {
        $(impl DisplayElement for $t {
            fn display(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_element!(num_bigint::BigInt, BigUint, u64, f64);

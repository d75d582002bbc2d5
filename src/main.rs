use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use console::Term;
use prime_factors::{factorize, group_multiplicities, parse_positive};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(log_filter(&cli.log_level)?)
        .init();

    let rejected = if !cli.numbers.is_empty() {
        run(&cli.numbers, cli.exponents, &mut io::stdout(), &mut io::stderr())?
    } else if io::stdin().is_terminal() && Term::stdout().is_term() {
        return do_loop(cli.exponents);
    } else {
        let inputs = read_inputs(io::stdin().lock())?;
        run(&inputs, cli.exponents, &mut io::stdout(), &mut io::stderr())?
    };

    if rejected > 0 {
        bail!("{rejected} input(s) rejected");
    }
    Ok(())
}

/// One number per line; blank lines are skipped.
fn read_inputs(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

fn log_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter {directive:?}"))
}

/// Factorizes every input, writing results to `out` and rejections to `errs`.
/// Returns the number of rejected inputs.
fn run<I, S>(inputs: I, exponents: bool, out: &mut impl Write, errs: &mut impl Write) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rejected = 0;
    for input in inputs {
        match parse_positive(input.as_ref()).and_then(|n| factorize(n).map(|f| (n, f))) {
            Ok((n, factors)) => writeln!(out, "{}", render(n, &factors, exponents))?,
            Err(err) => {
                debug!(%err, "rejected input");
                writeln!(errs, "{err}")?;
                rejected += 1;
            }
        }
    }
    Ok(rejected)
}

fn do_loop(exponents: bool) -> Result<()> {
    let mut term = Term::stdout();

    loop {
        write!(term, "n = ")?;
        let line = term.read_line()?;

        match parse_positive(&line).and_then(|n| factorize(n).map(|f| (n, f))) {
            Ok((n, factors)) => {
                debug!(n, count = factors.len(), "factorized");
                write!(term, "\n{}\n\n", render(n, &factors, exponents))?;
            }
            Err(err) => {
                debug!(%err, "rejected input");
                write!(term, "\n{err}\n\n")?;
            }
        }

        write!(term, "Again? (Y/n) ")?;

        if term.read_char()? == 'n' {
            writeln!(term)?;
            return Ok(());
        }

        write!(term, "\n\n")?;
    }
}

fn render(n: u64, factors: &[u64], exponents: bool) -> String {
    if !exponents {
        return format!("prime_factors({n}) = {factors:?}");
    }
    if factors.is_empty() {
        return format!("{n} = 1");
    }
    let terms: Vec<String> = group_multiplicities(factors)
        .into_iter()
        .map(|(p, k)| if k == 1 { p.to_string() } else { format!("{p}^{k}") })
        .collect();
    format!("{n} = {}", terms.join(" * "))
}

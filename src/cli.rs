use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "prime-factors")]
#[command(version, about = "Factorize positive integers by trial division")]
pub struct Cli {
    /// Numbers to factorize; starts an interactive prompt when omitted
    pub numbers: Vec<String>,

    /// Print `2^3 * 3` instead of the factor list
    #[arg(long, short = 'e')]
    pub exponents: bool,

    /// Log filter directive (e.g. `prime_factors=trace`)
    #[arg(long, env = "PRIME_FACTORS_LOG", default_value = "warn")]
    pub log_level: String,
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(name = "domain2ip", version)]
/// Pipeline completo: lista de dominios -> conexión TCP:80 -> IPs resueltas -> archivo
pub struct Args {
    /// Archivo de entrada con dominios, uno por línea
    #[arg(short = 'l', long = "input")]
    pub input: PathBuf,

    /// Archivo de salida donde se anexan las IPs resueltas
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Resoluciones simultáneas (tamaño del pool)
    #[arg(short = 't', long = "threads", default_value_t = 200)]
    pub threads: usize,
}

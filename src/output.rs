use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::models::Resolution;

/// Colapsa la secuencia de resultados en un mapa dominio -> IP opcional.
/// Dominios duplicados: gana la última escritura.
pub fn build_result_set(results: Vec<Resolution>) -> BTreeMap<String, Option<String>> {
    results.into_iter().map(|r| (r.domain, r.ip)).collect()
}

/// Anexa "<dominio>: <ip>" por cada entrada resuelta y la imprime en consola.
/// Las entradas sin IP se omiten (su fallo ya se reportó al resolver).
pub fn save_ips(path: &Path, ips: &BTreeMap<String, Option<String>>) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("No pude abrir {} para escribir", path.display()))?;
    for (domain, ip) in ips {
        if let Some(ip) = ip {
            println!("{domain}: {ip}");
            writeln!(file, "{domain}: {ip}")?;
        }
    }
    Ok(())
}

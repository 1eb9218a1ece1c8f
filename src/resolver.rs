use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tokio::{net::TcpStream, sync::Semaphore, time::timeout};

use crate::models::Resolution;

pub const CONNECT_PORT: u16 = 80;
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);

/// Resuelve un dominio conectando por TCP y leyendo la IP del peer.
/// No es DNS puro: un dominio que resuelve pero bloquea el puerto cuenta como fallo.
pub async fn resolve_one(domain: &str, port: u16, limit: Duration) -> Result<String> {
    let conn = timeout(limit, TcpStream::connect((domain, port)))
        .await
        .with_context(|| format!("Timeout conectando a {domain}:{port}"))??;
    let ip = conn.peer_addr()?.ip().to_string();
    Ok(ip)
}

/// Un intento por dominio, sin reintentos. Los fallos se reportan con "[-]" y quedan
/// contenidos aquí: el resultado conserva la correspondencia dominio -> IP opcional
/// en el mismo orden de entrada, sin importar el orden de término.
pub async fn resolve_many_with_progress(domains: &[String], concurrency: usize) -> Result<Vec<Resolution>> {
    let pb = ProgressBar::new(domains.len() as u64);
    pb.set_style(ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/black} {pos}/{len} ({percent}%) Resolviendo")?.progress_chars("##-"));
    let sem = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = Vec::new();
    for domain in domains {
        let domain = domain.clone();
        let s = sem.clone();
        let pb2 = pb.clone();
        tasks.push(tokio::spawn(async move {
            let _permit = s.acquire_owned().await.unwrap();
            let ip = match resolve_one(&domain, CONNECT_PORT, CONNECT_TIMEOUT).await {
                Ok(ip) => Some(ip),
                Err(_) => {
                    pb2.println(format!("[-]  {domain}"));
                    None
                }
            };
            pb2.inc(1);
            Resolution { domain, ip }
        }));
    }
    let mut results = Vec::new();
    for t in tasks {
        results.push(t.await?);
    }
    pb.finish_and_clear();
    Ok(results)
}

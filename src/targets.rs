use anyhow::{Context, Result};
use std::path::Path;

/// Carga dominios de un archivo, uno por línea, recortando espacios.
/// Las líneas vacías se conservan como dominio vacío (fallarán al resolver).
pub async fn load_domains(path: &Path) -> Result<Vec<String>> {
    let s = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("No pude leer la lista de dominios {}", path.display()))?;
    Ok(s.lines().map(|l| l.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::load_domains;
    use std::io::Write;

    #[tokio::test]
    async fn recorta_y_conserva_vacias() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "  example.com \nsub.example.org\n\nfoo.test\n").unwrap();
        let doms = load_domains(f.path()).await.unwrap();
        assert_eq!(doms, vec!["example.com", "sub.example.org", "", "foo.test"]);
    }

    #[tokio::test]
    async fn archivo_vacio() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let doms = load_domains(f.path()).await.unwrap();
        assert!(doms.is_empty());
    }

    #[tokio::test]
    async fn archivo_inexistente_es_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_domains(&dir.path().join("no_existe.txt")).await;
        assert!(err.is_err());
    }
}

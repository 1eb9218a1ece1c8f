#[derive(Debug, Clone)]
pub struct Resolution {
    pub domain: String,
    /// None = el dominio no resolvió o no aceptó conexión en el puerto 80.
    pub ip: Option<String>,
}

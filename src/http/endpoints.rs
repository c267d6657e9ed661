/// Route prefix identifying one backend microservice's resource namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Microservice {
    pub route: &'static str,
}

impl Microservice {
    /// Product catalog service
    pub fn producto_ms() -> Self {
        Self {
            route: "producto-ms/api/productos",
        }
    }

    /// Inventory service
    pub fn inventario_ms() -> Self {
        Self {
            route: "api/inventarios/productos",
        }
    }

    /// Compose the full path for `endpoint` under this microservice.
    ///
    /// Pure concatenation; a malformed suffix is the caller's problem.
    pub fn resolve(&self, endpoint: &str) -> String {
        format!("/{}{}", self.route, endpoint)
    }
}

/// Pre-resolved base paths for every microservice.
///
/// Built once at startup and read-only afterwards. The product service is
/// addressed through two variants: `producto_base` (no trailing slash) for
/// list and create, `producto_base_slash` for the id-suffixed routes. The
/// upstream API distinguishes the two, so both are kept.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub producto_base: String,
    pub producto_base_slash: String,
    pub inventario_base_slash: String,
}

impl AppSettings {
    pub fn new() -> Self {
        let producto = Microservice::producto_ms();
        let inventario = Microservice::inventario_ms();

        Self {
            producto_base: producto.resolve(""),
            producto_base_slash: producto.resolve("/"),
            inventario_base_slash: inventario.resolve("/"),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::new()
    }
}

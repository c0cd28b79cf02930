/// Clave de localStorage donde vive la credencial
pub const TOKEN_STORAGE_KEY: &str = "token";

//! 认证基础设施，密码散列与 JWT 令牌

mod bcrypt_hasher;
mod jwt_tokens;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use jwt_tokens::JwtTokenIssuer;

//! User Context - 用户字段校验规则

/// 用户名
///
/// 规则：3-20 个字符，仅允许字母、数字和下划线
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        let value = value.trim().to_string();
        let len = value.chars().count();
        if !(3..=20).contains(&len) {
            return Err("用户名长度必须在3-20个字符之间");
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err("用户名只能包含字母、数字和下划线");
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 邮箱地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        let value = value.trim().to_lowercase();
        if !is_valid_email(&value) {
            return Err("请输入有效的邮箱地址");
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 邮箱格式校验：local@domain，域名至少包含一个点
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.contains(char::is_whitespace) || value.matches('@').count() != 1 {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// 明文密码
///
/// 规则：至少 6 个字符。仅在注册路径上短暂存在，哈希后即丢弃
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        if value.chars().count() < 6 {
            return Err("密码长度至少为6个字符");
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// 避免在日志中泄露明文
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password(***)")
    }
}

/// 个人简介
///
/// 规则：最长 200 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bio(String);

impl Bio {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        let value = value.trim().to_string();
        if value.chars().count() > 200 {
            return Err("个人简介不能超过200个字符");
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// 头像 URL
///
/// 规则：必须是 http/https URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUrl(String);

impl AvatarUrl {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        let trimmed = value.trim();
        let is_http = trimmed.starts_with("http://") || trimmed.starts_with("https://");
        let has_host = trimmed
            .split_once("://")
            .map(|(_, rest)| !rest.is_empty())
            .unwrap_or(false);
        if !is_http || !has_host || trimmed.contains(char::is_whitespace) {
            return Err("头像必须是有效的URL");
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        assert!(Username::new("alice_01").is_ok());
        assert_eq!(Username::new("  bob  ").unwrap().as_str(), "bob");
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(Username::new("ab").is_err());
        assert!(Username::new("a".repeat(21)).is_err());
        assert!(Username::new("abc").is_ok());
        assert!(Username::new("a".repeat(20)).is_ok());
    }

    #[test]
    fn test_username_charset() {
        assert!(Username::new("ali ce").is_err());
        assert!(Username::new("ali-ce").is_err());
        assert!(Username::new("小明明明").is_err());
    }

    #[test]
    fn test_email_valid() {
        assert_eq!(
            Email::new(" Alice@Example.COM ").unwrap().as_str(),
            "alice@example.com"
        );
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("a@b").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("a@.com").is_err());
        assert!(Email::new("a b@example.com").is_err());
    }

    #[test]
    fn test_password_min_length() {
        assert!(Password::new("12345").is_err());
        assert!(Password::new("123456").is_ok());
    }

    #[test]
    fn test_password_debug_redacted() {
        let p = Password::new("secret123").unwrap();
        assert_eq!(format!("{:?}", p), "Password(***)");
    }

    #[test]
    fn test_bio_max_length() {
        assert!(Bio::new("x".repeat(200)).is_ok());
        assert!(Bio::new("x".repeat(201)).is_err());
    }

    #[test]
    fn test_avatar_url() {
        assert!(AvatarUrl::new("https://cdn.example.com/a.png").is_ok());
        assert!(AvatarUrl::new("ftp://example.com/a.png").is_err());
        assert!(AvatarUrl::new("https://").is_err());
        assert!(AvatarUrl::new("not a url").is_err());
    }
}

//! Post Context - 帖子字段校验与摘要生成

/// 摘要最大长度（字符数）
const EXCERPT_MAX_CHARS: usize = 150;

/// 帖子标题
///
/// 规则：5-200 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        let value = value.trim().to_string();
        let len = value.chars().count();
        if !(5..=200).contains(&len) {
            return Err("标题长度必须在5-200个字符之间");
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

impl std::fmt::Display for PostTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 帖子内容
///
/// 规则：至少 10 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        let value = value.trim().to_string();
        if value.chars().count() < 10 {
            return Err("内容长度至少为10个字符");
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

/// 标签名称
///
/// 规则：1-50 个字符
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        let value = value.trim().to_string();
        let len = value.chars().count();
        if !(1..=50).contains(&len) {
            return Err("标签名称长度必须在1-50个字符之间");
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

/// 评论内容
///
/// 规则：1-1000 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let value = value.into();
        let value = value.trim().to_string();
        let len = value.chars().count();
        if !(1..=1000).contains(&len) {
            return Err("评论内容长度必须在1-1000个字符之间");
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

/// 生成帖子摘要
///
/// 移除 HTML 标签后截断到 150 个字符，超长部分以 `...` 结尾
pub fn generate_excerpt(content: &str) -> String {
    let text = strip_html_tags(content);
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= EXCERPT_MAX_CHARS {
        return text;
    }
    let mut excerpt: String = chars[..EXCERPT_MAX_CHARS].iter().collect();
    excerpt.push_str("...");
    excerpt
}

/// 移除 HTML 标签（简单的 `<...>` 剥离，不解析嵌套结构）
fn strip_html_tags(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert!(PostTitle::new("abcd").is_err());
        assert!(PostTitle::new("abcde").is_ok());
        assert!(PostTitle::new("t".repeat(200)).is_ok());
        assert!(PostTitle::new("t".repeat(201)).is_err());
    }

    #[test]
    fn test_content_min_length() {
        assert!(PostContent::new("short").is_err());
        assert!(PostContent::new("long enough body").is_ok());
    }

    #[test]
    fn test_tag_name_bounds() {
        assert!(TagName::new("").is_err());
        assert!(TagName::new("   ").is_err());
        assert!(TagName::new("rust").is_ok());
        assert!(TagName::new("t".repeat(50)).is_ok());
        assert!(TagName::new("t".repeat(51)).is_err());
    }

    #[test]
    fn test_comment_content_bounds() {
        assert!(CommentContent::new("").is_err());
        assert!(CommentContent::new("好").is_ok());
        assert!(CommentContent::new("c".repeat(1000)).is_ok());
        assert!(CommentContent::new("c".repeat(1001)).is_err());
    }

    #[test]
    fn test_excerpt_short_content_unchanged() {
        assert_eq!(generate_excerpt("hello world"), "hello world");
    }

    #[test]
    fn test_excerpt_strips_html() {
        assert_eq!(
            generate_excerpt("<p>hello <b>world</b></p>"),
            "hello world"
        );
    }

    #[test]
    fn test_excerpt_truncates_long_content() {
        let content = "x".repeat(300);
        let excerpt = generate_excerpt(&content);
        assert_eq!(excerpt.chars().count(), 153);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        // 多字节字符按字符数截断
        let content = "汉".repeat(200);
        let excerpt = generate_excerpt(&content);
        assert_eq!(excerpt.chars().count(), 153);
    }
}

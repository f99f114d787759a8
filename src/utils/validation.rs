//! Hand validation for fields the validator derive cannot express

use crate::constants;

/// Usernames: letter first, then letters, digits, underscore, hyphen
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < constants::MIN_USERNAME_LENGTH as usize {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > constants::MAX_USERNAME_LENGTH as usize {
        return Err("Username must be at most 32 characters");
    }
    if !username.starts_with(|c: char| c.is_alphabetic()) {
        return Err("Username must start with a letter");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    Ok(())
}

/// Shallow email shape check; real verification is out of scope
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format");
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err("Invalid email format");
    }
    if !domain.contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Passwords need length plus three character classes
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < constants::MIN_PASSWORD_LENGTH as usize {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > constants::MAX_PASSWORD_LENGTH as usize {
        return Err("Password must be at most 128 characters");
    }

    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_numeric());

    if !has_lower {
        return Err("Password must contain at least one lowercase letter");
    }
    if !has_upper {
        return Err("Password must contain at least one uppercase letter");
    }
    if !has_digit {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Language must be one the judge supports
pub fn validate_language(language: &str) -> Result<(), &'static str> {
    if constants::languages::ALL.contains(&language) {
        Ok(())
    } else {
        Err("Unsupported programming language")
    }
}

pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate problem difficulty
pub fn validate_difficulty(difficulty: &str) -> Result<(), &'static str> {
    if constants::difficulties::ALL.contains(&difficulty) {
        Ok(())
    } else {
        Err("Invalid difficulty")
    }
}

/// Reject source blobs over the cap before anything touches the judge
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.trim().is_empty() {
        return Err("Source code cannot be empty");
    }
    if code.len() > constants::MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size of 64KB");
    }
    Ok(())
}

/// Strip control characters (except newline and tab) and trim
pub fn sanitize_string(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect();
    kept.trim().to_string()
}

/// Validate and sanitize a title (problems and forum threads)
pub fn validate_title(title: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(title);
    if sanitized.is_empty() {
        return Err("Title cannot be empty");
    }
    if sanitized.len() > constants::MAX_THREAD_TITLE_LENGTH as usize {
        return Err("Title must be at most 200 characters");
    }
    Ok(sanitized)
}

/// Validate forum post content (threads and replies)
pub fn validate_forum_body(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() {
        return Err("Content cannot be empty");
    }
    if content.len() > constants::MAX_FORUM_BODY_LENGTH as usize {
        return Err("Content is too long");
    }
    Ok(())
}

/// Validate and sanitize a forum category name
pub fn validate_category_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Category name cannot be empty");
    }
    if sanitized.len() > constants::MAX_CATEGORY_NAME_LENGTH as usize {
        return Err("Category name must be at most 64 characters");
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_must_be_wellformed() {
        assert!(validate_username("priya").is_ok());
        assert!(validate_username("dev-anand_22").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("9lives").is_err());
        assert!(validate_username("who am i").is_err());
        assert!(validate_username(&"x".repeat(33)).is_err());
    }

    #[test]
    fn emails_need_a_local_part_and_a_dotted_domain() {
        assert!(validate_email("someone@iitb.ac.in").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@host.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn passwords_need_mixed_case_and_a_digit() {
        assert!(validate_password("CampusC0de").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("alllowercase1").is_err());
        assert!(validate_password("ALLUPPERCASE1").is_err());
        assert!(validate_password("NoDigitsHere").is_err());
    }

    #[test]
    fn only_known_languages_pass() {
        assert!(validate_language("cpp").is_ok());
        assert!(validate_language("python").is_ok());
        assert!(validate_language("brainfuck").is_err());
    }

    #[test]
    fn only_known_difficulties_pass() {
        assert!(validate_difficulty("easy").is_ok());
        assert!(validate_difficulty("medium").is_ok());
        assert!(validate_difficulty("hard").is_ok());
        assert!(validate_difficulty("nightmare").is_err());
    }

    #[test]
    fn titles_are_trimmed_and_bounded() {
        assert_eq!(
            validate_title("  How do I read input?  ").unwrap(),
            "How do I read input?"
        );
        assert!(validate_title("").is_err());
        assert!(validate_title("   \t ").is_err());
        assert!(validate_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn forum_bodies_reject_blank_and_oversized_content() {
        assert!(validate_forum_body("use BufReader").is_ok());
        assert!(validate_forum_body("   ").is_err());
        assert!(validate_forum_body(&"x".repeat(70_000)).is_err());
    }

    #[test]
    fn category_names_are_trimmed_and_bounded() {
        assert_eq!(validate_category_name(" General ").unwrap(), "General");
        assert!(validate_category_name("").is_err());
        assert!(validate_category_name(&"c".repeat(65)).is_err());
    }

    #[test]
    fn source_code_must_be_nonempty_and_bounded() {
        assert!(validate_source_code("print(42)").is_ok());
        assert!(validate_source_code("  \n ").is_err());
        assert!(validate_source_code(&"a".repeat(70_000)).is_err());
    }

    #[test]
    fn sanitize_strips_control_characters_but_keeps_structure() {
        assert_eq!(sanitize_string("a\u{0000}b"), "ab");
        assert_eq!(
            sanitize_string("  keep\tnewlines\nplease  "),
            "keep\tnewlines\nplease"
        );
    }
}

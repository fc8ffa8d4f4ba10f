/// Extensions loaded with `zend_extension=` instead of `extension=`.
const ZEND_EXTENSIONS: &[&str] = &["xdebug", "opcache", "ioncube"];

fn tokens(csv: &str) -> impl Iterator<Item = &str> {
    csv.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Parse a comma separated extension list, dropping a leading `php_`/`php-`.
pub fn extension_array(csv: &str) -> Vec<String> {
    tokens(csv)
        .map(|token| {
            token
                .strip_prefix("php_")
                .or_else(|| token.strip_prefix("php-"))
                .unwrap_or(token)
                .to_owned()
        })
        .collect()
}

/// Parse a comma separated list of `key=value` php.ini directives.
pub fn ini_array(csv: &str) -> Vec<String> {
    tokens(csv).map(str::to_owned).collect()
}

pub fn extension_prefix(extension: &str) -> &'static str {
    if ZEND_EXTENSIONS.iter().any(|zend| *zend == extension) {
        "zend_extension"
    } else {
        "extension"
    }
}

use url::Url;

// Relative bases ("" or "/proxy") are resolved against this and only the path is kept.
const RELATIVE_ROOT: &str = "http://relative.invalid/";

/// Appends percent-encoded path segments to `base`.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    match Url::parse(base) {
        Ok(mut url) if !url.cannot_be_a_base() => {
            push_segments(&mut url, segments);
            url.to_string()
        }
        _ => match Url::parse(RELATIVE_ROOT).and_then(|root| root.join(base)) {
            Ok(mut url) => {
                push_segments(&mut url, segments);
                url.path().to_string()
            }
            Err(_) => format!("{base}/{}", segments.join("/")),
        },
    }
}

fn push_segments(url: &mut Url, segments: &[&str]) {
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
}

/// Percent-encodes one path segment so that e.g. `a/b` can't escape its route.
pub fn encode_segment(segment: &str) -> String {
    join_url("", &[segment])
        .trim_start_matches('/')
        .to_string()
}

/// Undoes [`encode_segment`]. Invalid UTF-8 leaves the segment as it came in.
pub fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

pub fn minutes(count: u32) -> String {
    format!("{count} mins")
}

pub fn servings(count: u32) -> String {
    format!("{count} serving")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_base_gets_segments_appended() {
        assert_eq!(
            join_url("http://127.0.0.1:8000", &["api", "recipes"]),
            "http://127.0.0.1:8000/api/recipes"
        );
        assert_eq!(
            join_url("https://example.com/kitchen", &["api", "recipes", "42"]),
            "https://example.com/kitchen/api/recipes/42"
        );
    }

    #[test]
    fn relative_base_keeps_only_the_path() {
        assert_eq!(join_url("", &["api", "recipes"]), "/api/recipes");
        assert_eq!(join_url("/proxy", &["api", "recipes"]), "/proxy/api/recipes");
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(
            join_url("http://127.0.0.1:8000", &["api", "recipes", "a/b c"]),
            "http://127.0.0.1:8000/api/recipes/a%2Fb%20c"
        );
        assert_eq!(encode_segment("42"), "42");
        assert_eq!(encode_segment("soup?x"), "soup%3Fx");
    }

    #[test]
    fn decoding_reverses_encoding() {
        for segment in ["42", "a b", "a/b", "soup?x", "100%", "crème brûlée"] {
            assert_eq!(decode_segment(&encode_segment(segment)), segment);
        }
        assert_eq!(decode_segment("a%2Fb"), "a/b");
        assert_eq!(decode_segment("plain"), "plain");
        assert_eq!(decode_segment("bad%FF"), "bad%FF");
    }

    #[test]
    fn labels() {
        assert_eq!(minutes(20), "20 mins");
        assert_eq!(servings(4), "4 serving");
    }
}

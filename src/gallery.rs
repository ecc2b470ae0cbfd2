/// Image reference helpers
///
/// Everything the landing page shows goes through these functions first,
/// so the rendered image lists never contain an invalid reference. All
/// functions here are pure and total: malformed input yields the fallback
/// placeholder (or an empty list), never an error.

/// 1x1 transparent PNG as a safe, always-available fallback.
/// Decodes in-process, so it renders without any file or network access.
pub const FALLBACK_IMAGE_REF: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR4nGNgYAAAAAMAAbitOmMAAAAASUVORK5CYII=";

/// Check whether a string is an acceptable image reference.
///
/// Accepted forms: http(s) URLs, protocol-relative URLs (`//cdn/...`),
/// embedded `data:` URIs, and relative or rooted paths. Anything else
/// (including the empty string) is rejected.
pub fn is_valid_image_ref(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    candidate.starts_with("http://")
        || candidate.starts_with("https://")
        || candidate.starts_with("//")
        || candidate.starts_with("data:")
        || candidate.starts_with("./")
        || candidate.starts_with("../")
        || candidate.starts_with('/')
}

/// Return the reference unchanged when valid, else the fallback placeholder.
pub fn select_image_src(candidate: &str) -> String {
    if is_valid_image_ref(candidate) {
        candidate.to_string()
    } else {
        FALLBACK_IMAGE_REF.to_string()
    }
}

/// Coerce an optional reference list into a concrete one.
/// Absent input becomes the empty list; present input passes through.
pub fn coerce_refs(refs: Option<Vec<String>>) -> Vec<String> {
    refs.unwrap_or_default()
}

/// Restrict an index to `[0, len - 1]`.
///
/// `len <= 0` returns 0 so callers never have to special-case an empty
/// set. The index is signed because navigation math can go below zero.
pub fn clamp_index(index: isize, len: isize) -> usize {
    if len <= 0 {
        return 0;
    }
    index.clamp(0, len - 1) as usize
}

/// Build the gallery list from raw configuration: trim each entry, drop
/// blanks, keep the original order.
pub fn gallery_list(raw: Option<Vec<String>>) -> Vec<String> {
    coerce_refs(raw)
        .iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Ordered reference set for the magnified viewer: validated hero first,
/// then the validated gallery entries. The hero always occupies slot 0;
/// gallery tile `i` maps to slot `1 + i`.
pub fn lightbox_refs(hero: &str, gallery: &[String]) -> Vec<String> {
    let mut refs = Vec::with_capacity(1 + gallery.len());
    refs.push(select_image_src(hero));
    refs.extend(gallery.iter().map(|entry| select_image_src(entry)));
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prefixes_accepted() {
        for candidate in [
            "http://example.com/x.png",
            "https://example.com/x.png",
            "//cdn.example.com/asset.jpg",
            "data:image/png;base64,AAA",
            "./relative.jpg",
            "../parent.jpg",
            "/rooted/path.jpg",
        ] {
            assert!(is_valid_image_ref(candidate), "{} should be valid", candidate);
        }
    }

    #[test]
    fn test_invalid_refs_rejected() {
        for candidate in ["", "not-a-url", "ftp://bad", "javascript:alert(1)", "  "] {
            assert!(!is_valid_image_ref(candidate), "{:?} should be invalid", candidate);
        }
    }

    #[test]
    fn test_select_keeps_valid_refs() {
        assert_eq!(select_image_src("/images/hero.jpg"), "/images/hero.jpg");
        assert_eq!(
            select_image_src("https://example.com/a.png"),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn test_select_substitutes_fallback() {
        assert_eq!(select_image_src("not-a-url"), FALLBACK_IMAGE_REF);
        assert_eq!(select_image_src(""), FALLBACK_IMAGE_REF);
    }

    #[test]
    fn test_coerce_refs_is_idempotent() {
        let refs = vec!["a".to_string(), "b".to_string()];
        assert_eq!(coerce_refs(Some(refs.clone())), refs);
        assert_eq!(coerce_refs(Some(coerce_refs(Some(refs.clone())))), refs);
        assert!(coerce_refs(None).is_empty());
        assert!(coerce_refs(Some(coerce_refs(None))).is_empty());
    }

    #[test]
    fn test_clamp_index_bounds() {
        assert_eq!(clamp_index(-1, 5), 0);
        assert_eq!(clamp_index(6, 5), 4);
        assert_eq!(clamp_index(3, 5), 3);
        assert_eq!(clamp_index(0, 0), 0);
        assert_eq!(clamp_index(7, -3), 0);
    }

    #[test]
    fn test_gallery_list_drops_blanks_keeps_order() {
        let raw = vec![
            "/images/g1.jpg".to_string(),
            "".to_string(),
            "  ".to_string(),
            "/images/g2.jpg".to_string(),
        ];
        assert_eq!(
            gallery_list(Some(raw)),
            vec!["/images/g1.jpg".to_string(), "/images/g2.jpg".to_string()]
        );
        assert!(gallery_list(None).is_empty());
    }

    #[test]
    fn test_invalid_hero_falls_back_at_slot_zero() {
        let gallery = vec!["/images/g1.jpg".to_string()];
        let refs = lightbox_refs("ftp://bad", &gallery);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0], FALLBACK_IMAGE_REF);
        assert_eq!(refs[1], "/images/g1.jpg");
    }

    #[test]
    fn test_lightbox_refs_hero_first() {
        let gallery = vec!["/images/g1.jpg".to_string(), "/images/g2.jpg".to_string()];
        let refs = lightbox_refs("/images/hero.jpg", &gallery);
        assert_eq!(refs[0], "/images/hero.jpg");
        assert_eq!(refs.len(), 1 + gallery.len());
    }
}

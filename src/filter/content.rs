//! Editorial content heuristic.
//!
//! Paths whose segments name blogs, news, stories and similar human-written content
//! are noise for application recon. Matching is per segment, after ASCII digits
//! are stripped (`review01` becomes `review`), against a vocabulary in English, Spanish
//! and French. False positives and negatives are expected.

use std::collections::HashSet;
use std::sync::LazyLock;

#[rustfmt::skip]
pub const EDITORIAL_WORDS: &[&str] = &[
    // english
    "blog", "post", "posts", "stories", "story", "press", "magazine", "news", "articles",
    "opinions", "images", "comments", "updates", "interviews", "galery", "gallery", "advices",
    "current-affairs", "chronicles", "reports", "reviews", "life", "journal", "travel",
    "experiencies", "experiences", "editorial", "publications", "texts", "writings", "tales",
    "announcements", "analysis", "columns", "topics", "section", "bloggers", "journalism",
    "notes", "blog-articles", "featured-interviews",
    // spanish
    "historias", "personal", "diario", "vida", "historia", "imagenes", "galeria", "consejos",
    "viajes", "experiencias", "prensa", "revista", "noticias", "articulos", "informacion",
    "opiniones", "comentarios", "novedades", "entrevistas", "actualidad", "cronicas",
    "reportajes", "reseñas", "publicaciones", "textos", "escritos", "relatos",
    "comunicados", "analisis", "columnas", "temas", "contenidos", "lecturas", "blogspot",
    "sitio", "seccion", "archivo", "blogueros", "autores", "periodismo", "notas",
    "articulos-de-blog", "entrevistas-destacadas",
    // french
    "histoires", "presse", "actualites", "information", "commentaires", "mises-a-jour",
    "entretiens", "chroniques", "reportages", "critiques", "textes", "ecrits", "annonces",
    "analyse", "colonnes", "contenus", "lectures", "blogueurs", "auteurs", "journalisme",
    "articles-de-blog", "interviews-a-la-une",
];

static VOCABULARY: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| EDITORIAL_WORDS.iter().copied().collect());

/// Returns `true` if any segment of `path` names editorial content.
pub fn is_editorial_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        let stripped: String = segment
            .chars()
            .filter(|c| !c.is_ascii_digit())
            .collect::<String>()
            .to_lowercase();
        !stripped.is_empty() && VOCABULARY.contains(stripped.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_paths_are_editorial() {
        assert!(is_editorial_path("/blog/my-story-01"));
        assert!(is_editorial_path("/en/news/2023/10/some-title"));
        assert!(is_editorial_path("/noticias/hoy"));
        assert!(is_editorial_path("/fr/actualites"));
    }

    #[test]
    fn test_digits_are_stripped_before_lookup() {
        assert!(is_editorial_path("/reviews01/product"));
        assert!(is_editorial_path("/2blog2/"));
    }

    #[test]
    fn test_only_ascii_digits_are_stripped() {
        assert!(!is_editorial_path("/blog½/"));
        assert!(!is_editorial_path("/newsⅣ"));
        assert!(is_editorial_path("/news4"));
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert!(is_editorial_path("/Blog/entry"));
    }

    #[test]
    fn test_application_paths_are_not_editorial() {
        assert!(!is_editorial_path("/api/v1/users"));
        assert!(!is_editorial_path("/admin/login.php"));
        assert!(!is_editorial_path("/"));
        assert!(!is_editorial_path(""));
    }

    #[test]
    fn test_only_whole_segments_match() {
        assert!(!is_editorial_path("/blogging-platform/api"));
        assert!(!is_editorial_path("/my-story-01"));
    }
}

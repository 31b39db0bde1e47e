/// Hero backdrop, fetched off the critical render path as soon as the page
/// mounts. Browser-level caching is relied on; there is no local copy.
pub const HERO_BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?w=1920&h=1080&fit=crop&auto=format&q=80";

/// CTA banner backdrop, only fetched once the section comes within 200px
/// of the viewport.
pub const CTA_BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?w=1920&h=800&fit=crop&auto=format&q=80";

//! Test fixtures: saved-page style HTML for extraction tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{release_page, KIND_OF_BLUE_HTML};
//!
//! let html = release_page(Some("Can - Tago Mago"), None, &["Krautrock"], &[]);
//! let record = RateYourMusic::new().extract(&RawDocument::parse(&html));
//! ```

/// A trimmed-down but structurally faithful RYM album page.
pub const KIND_OF_BLUE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Kind of Blue by Miles Davis (Album, Modal Jazz): Reviews, Ratings, Credits, Song list - Rate Your Music</title>
  <meta property="og:title" content="Miles Davis - Kind of Blue">
  <meta property="og:image" content="https://e.snmc.io/i/600/w/kind-of-blue.jpg">
  <meta property="og:description" content="Kind of Blue, an album by Miles Davis. Released 17 August 1959 on Columbia.">
</head>
<body>
  <div class="album_info">
    <table class="album_info">
      <tr><th class="info_hdr">Artist</th>
          <td><a href="/artist/miles-davis" class="artist">Miles Davis</a></td></tr>
      <tr><th class="info_hdr">Type</th><td>Album</td></tr>
      <tr><th class="info_hdr">Released</th><td>17 August 1959</td></tr>
      <tr><th class="info_hdr">Recorded</th><td>2 March 1959 - 22 April 1959</td></tr>
      <tr><th class="info_hdr">Genres</th>
          <td><span class="release_pri_genres">
            <a class="genre" href="/genre/modal-jazz/">Modal Jazz</a>,
            <a class="genre" href="/genre/cool-jazz/">Cool Jazz</a>
          </span></td></tr>
    </table>
  </div>
  <div id="tracks">
    <ul>
      <li class="track"><span class="tracklist_num">1</span>
          <span class="tracklist_title"><span class="rendered_text">So What</span></span>
          <span class="tracklist_duration">9:22</span></li>
      <li class="track"><span class="tracklist_num">2</span>
          <span class="tracklist_title"><span class="rendered_text">Freddie Freeloader</span></span>
          <span class="tracklist_duration">9:46</span></li>
      <li class="track"><span class="tracklist_num">3</span>
          <span class="tracklist_title"><span class="rendered_text">Blue in Green</span></span>
          <span class="tracklist_duration">5:37</span></li>
      <li class="track"><span class="tracklist_num">4</span>
          <span class="tracklist_title"><span class="rendered_text">All Blues</span></span>
          <span class="tracklist_duration">11:33</span></li>
      <li class="track"><span class="tracklist_num">5</span>
          <span class="tracklist_title"><span class="rendered_text">Flamenco Sketches</span></span>
          <span class="tracklist_duration">9:26</span></li>
      <li class="track_total"><span class="tracklist_total">Total length: 45:44</span></li>
    </ul>
  </div>
</body>
</html>
"#;

/// Build a minimal release page with only the given anchors present.
///
/// `None` / empty slices leave the corresponding anchor out entirely.
pub fn release_page(
    og_title: Option<&str>,
    release_date: Option<&str>,
    genres: &[&str],
    tracks: &[&str],
) -> String {
    let mut head = String::new();
    if let Some(title) = og_title {
        head.push_str(&format!(r#"<meta property="og:title" content="{title}">"#));
    }

    let mut body = String::new();
    if let Some(date) = release_date {
        body.push_str(&format!(r#"<span class="release_date">{date}</span>"#));
    }
    if !genres.is_empty() {
        body.push_str(r#"<div class="release_pri_genres">"#);
        for genre in genres {
            body.push_str(&format!(r#"<a href="/genre/">{genre}</a> "#));
        }
        body.push_str("</div>");
    }
    if !tracks.is_empty() {
        body.push_str(r#"<div id="tracks"><ul>"#);
        for track in tracks {
            body.push_str(&format!(
                r#"<li class="track"><span class="rendered_text">{track}</span></li>"#
            ));
        }
        body.push_str("</ul></div>");
    }

    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}

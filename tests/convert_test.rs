use curl_to_kodi::curl::{AllowList, HeaderMap, HeaderPolicy};
use curl_to_kodi::sanitize::{base_name, sanitize_filename};
use curl_to_kodi::script::ScriptDialect;
use curl_to_kodi::strm::strm_content;
use curl_to_kodi::ytdlp::ytdlp_args;
use curl_to_kodi::{ConvertOptions, Error, convert, parse_curl};
use rstest::*;

const CURL_EXAMPLE: &str = "curl 'https://example.com/video.mp4' -H 'Authorization: Bearer TOKEN' -H 'User-Agent: Kodi/19' -H 'Other: value'";

const CHROME_COPY: &str = r#"curl 'https://cdn.example.net/hls/master.m3u8?token=abc123&exp=1700000000' \
  -H 'accept: */*' \
  -H 'accept-language: en-US,en;q=0.9' \
  -H 'cookie: session=xyz; consent=yes' \
  -H 'origin: https://player.example.com' \
  -H 'referer: https://player.example.com/' \
  -H 'sec-fetch-mode: cors' \
  -H 'user-agent: Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36'"#;

#[test]
fn test_parse_with_default_allow_list() {
    let parsed = parse_curl(CURL_EXAMPLE, &HeaderPolicy::default());
    assert_eq!(parsed.url.as_deref(), Some("https://example.com/video.mp4"));
    assert!(parsed.headers.contains("User-Agent"));
    assert!(!parsed.headers.contains("Other"));
    assert!(!parsed.headers.contains("Authorization"));
}

#[test]
fn test_parse_with_customized_allow_list() {
    let policy = HeaderPolicy::AllowList(AllowList::new(["authorization", "user-agent"]));
    let parsed = parse_curl(CURL_EXAMPLE, &policy);
    assert_eq!(parsed.headers.get("Authorization"), Some("Bearer TOKEN"));
    assert_eq!(parsed.headers.get("User-Agent"), Some("Kodi/19"));
}

#[test]
fn test_descriptor_for_known_headers() {
    let headers: HeaderMap = [("User-Agent", "UA/1.0"), ("Referer", "https://ref")]
        .into_iter()
        .collect();
    assert_eq!(
        strm_content("https://example.com/vid.mp4", &headers).unwrap(),
        "https://example.com/vid.mp4|User-Agent=UA%2F1.0&Referer=https%3A%2F%2Fref"
    );
}

#[test]
fn test_chrome_copy_as_curl() {
    let conversion = convert(CHROME_COPY, &ConvertOptions::default()).unwrap();
    assert_eq!(
        conversion.url,
        "https://cdn.example.net/hls/master.m3u8?token=abc123&exp=1700000000"
    );
    assert_eq!(
        conversion.strm,
        "https://cdn.example.net/hls/master.m3u8?token=abc123&exp=1700000000\
         |cookie=session%3Dxyz%3B%20consent%3Dyes\
         &origin=https%3A%2F%2Fplayer.example.com\
         &referer=https%3A%2F%2Fplayer.example.com%2F\
         &user-agent=Mozilla%2F5.0%20%28X11%3B%20Linux%20x86_64%29%20AppleWebKit%2F537.36%20%28KHTML%2C%20like%20Gecko%29%20Chrome%2F120.0.0.0%20Safari%2F537.36"
    );
}

#[rstest]
#[case("")]
#[case("bad:name*here?")]
#[case("bad:name*here?.mp4")]
#[case(r#"Movie: "Best/Stream?""#)]
#[case("a.b.c")]
fn test_sanitize_is_idempotent(#[case] input: &str) {
    let once = sanitize_filename(input);
    assert_eq!(sanitize_filename(&once), once);
}

#[test]
fn test_sanitize_examples() {
    assert_eq!(sanitize_filename(""), "output");
    assert_eq!(sanitize_filename("bad:name*here?"), "bad_name_here_");
    assert_eq!(base_name("bad:name*here?.mp4"), "bad_name_here_");
}

#[test]
fn test_ytdlp_output_pair_is_last() {
    let headers: HeaderMap = [("Cookie", "a=1")].into_iter().collect();
    let args = ytdlp_args("https://e.example/v", &headers, Some("out"));
    assert_eq!(args[args.len() - 2..], ["-o", "out.%(ext)s"]);
}

#[test]
fn test_script_uses_requested_dialect() {
    let options = ConvertOptions {
        emit_downloader_script: true,
        script_dialect: ScriptDialect::WindowsPowerShell,
        base_name: "clip".to_string(),
        ..ConvertOptions::default()
    };
    let script = convert(CURL_EXAMPLE, &options).unwrap().script.unwrap();
    assert_eq!(script.dialect, ScriptDialect::WindowsPowerShell);
    assert_eq!(
        script.command,
        "yt-dlp --add-header 'User-Agent: Kodi/19' https://example.com/video.mp4 -o 'clip.%(ext)s'"
    );
}

#[test]
fn test_errors() {
    assert!(matches!(convert(" ", &ConvertOptions::default()), Err(Error::NoInput)));
    assert!(matches!(
        convert("curl example.com", &ConvertOptions::default()),
        Err(Error::MissingUrl)
    ));
    assert!(matches!(
        strm_content("", &HeaderMap::new()),
        Err(Error::InvalidInput)
    ));
}

use curl_to_kodi::{ConvertOptions, convert, script::ScriptDialect};

fn main() {
    let curl_command = "curl 'https://example.com/video.m3u8' -H 'User-Agent: Kodi/19' -H 'Referer: https://example.com/'";
    let options = ConvertOptions {
        emit_downloader_script: true,
        script_dialect: ScriptDialect::PosixShell,
        ..ConvertOptions::default()
    };
    match convert(curl_command, &options) {
        Ok(conversion) => {
            println!("{}", conversion.strm);
            if let Some(script) = conversion.script {
                println!("{}", script.command);
            }
        }
        Err(e) => eprintln!("Error converting curl command: {e}"),
    }
}

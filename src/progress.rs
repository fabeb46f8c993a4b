use std::io::Write;
use std::sync::Arc;

use indicatif::HumanBytes;

use crate::downloader::ProgressFn;

/// Returns the default progress function: a single updating line on stdout.
pub fn default_progress_fn() -> ProgressFn {
    Arc::new(|src: &str, current: u64, total: u64, complete: bool| {
        let line = progress_line(src, current, total);
        let mut out = std::io::stdout().lock();
        if complete {
            let _ = writeln!(out, "\r\x1b[K{line}");
        } else {
            let _ = write!(out, "\r\x1b[K{line}");
            let _ = out.flush();
        }
    })
}

fn progress_line(src: &str, current: u64, total: u64) -> String {
    if total > 0 {
        format!(
            "downloading {src}... {} of {}",
            HumanBytes(current),
            HumanBytes(total)
        )
    } else {
        format!("downloading {src}... {}", HumanBytes(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_with_and_without_total() {
        assert_eq!(
            progress_line("u", 512, 2048),
            "downloading u... 512 B of 2.00 KiB"
        );
        assert_eq!(progress_line("u", 512, 0), "downloading u... 512 B");
    }
}

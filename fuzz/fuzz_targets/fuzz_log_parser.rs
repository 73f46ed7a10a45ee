#![no_main]

use libfuzzer_sys::fuzz_target;
use mdavg::log_file::LogLayout;
use mdavg::pipeline::analyze_reader;

fuzz_target!(|data: &[u8]| {
    // Any input must either analyze or return an error, never panic
    if let Ok(analysis) = analyze_reader(data, &LogLayout::default()) {
        let averages = analysis.averages();
        assert_eq!(averages.len(), analysis.samples().len());
        assert_eq!(averages.total().len(), averages.pressure().len());
        let _ = analysis.report().to_string();
    }
});

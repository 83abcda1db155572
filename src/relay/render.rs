//! Plain-text rendering of an engine reply.

use std::fmt::Write;

use crate::engine::EngineResponse;

/// Render the status block returned to relay callers.
pub fn render_status(response: &EngineResponse) -> String {
    let mut out = String::with_capacity(256);
    // Writing into a String cannot fail.
    let _ = write_status(&mut out, response);
    out
}

fn write_status(out: &mut String, r: &EngineResponse) -> std::fmt::Result {
    writeln!(out, "--- Engine Status ---")?;
    writeln!(out, "[Input Date] : {}", r.received_date)?;
    writeln!(out, "[Input Time] : {}", r.received_time)?;
    writeln!(out, "[Year Pillar] : {} (The Year's Fate)", r.year_pillar)?;
    writeln!(out, "[Month Pillar] : {} (The Month's Fate)", r.month_pillar)?;
    writeln!(out, "[Day Pillar] : {} (The Day's Fate)", r.day_pillar)?;
    writeln!(out, "[Time Pillar] : {} (The Time's Fate)", r.time_pillar)?;
    writeln!(out, "[Message] : {}", r.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EngineResponse {
        EngineResponse {
            message: "ok".into(),
            received_date: "2000-01-01".into(),
            received_time: "12:00".into(),
            year_pillar: "Geng-Chen".into(),
            month_pillar: "Wu-Zi".into(),
            day_pillar: "Jia-Yin".into(),
            time_pillar: "Bing-Wu".into(),
        }
    }

    #[test]
    fn renders_template() {
        let expected = "--- Engine Status ---\n\
                        [Input Date] : 2000-01-01\n\
                        [Input Time] : 12:00\n\
                        [Year Pillar] : Geng-Chen (The Year's Fate)\n\
                        [Month Pillar] : Wu-Zi (The Month's Fate)\n\
                        [Day Pillar] : Jia-Yin (The Day's Fate)\n\
                        [Time Pillar] : Bing-Wu (The Time's Fate)\n\
                        [Message] : ok\n";
        assert_eq!(render_status(&sample()), expected);
    }

    #[test]
    fn fields_are_not_escaped() {
        let mut response = sample();
        response.message = "Fate for 2000-01-01 12:00 <b>".into();
        assert!(render_status(&response).ends_with("[Message] : Fate for 2000-01-01 12:00 <b>\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_status(&sample()), render_status(&sample()));
    }
}

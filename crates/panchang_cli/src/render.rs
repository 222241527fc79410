//! Plain-text rendering of engine results.

use chrono::DateTime;
use chrono_tz::Tz;
use panchang_engine::{CurrentPeriod, ElementWindow, PanchangResult, SunTimes};
use panchang_time::{format_duration_hm, format_hm};

fn hm(t: Option<&DateTime<Tz>>) -> String {
    t.map_or_else(|| "--:--".to_string(), format_hm)
}

fn stamp(t: &DateTime<Tz>) -> String {
    t.format("%d %b %H:%M").to_string()
}

fn span(w: &ElementWindow) -> String {
    format!("{} -> {}", stamp(&w.start), stamp(&w.end))
}

fn place(r: &PanchangResult) -> String {
    let loc = &r.location;
    let ns = if loc.latitude_deg >= 0.0 { 'N' } else { 'S' };
    let ew = if loc.longitude_deg >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.4} {ns}, {:.4} {ew} ({})",
        loc.latitude_deg.abs(),
        loc.longitude_deg.abs(),
        r.timezone
    )
}

pub fn day(r: &PanchangResult) {
    println!("Panchang for {} at {}", r.date, place(r));
    println!("Reference: {} {}\n", r.reference.kind.name(), format_hm(&r.reference.time));

    println!(
        "Vara:      {} ({}), lord {}",
        r.vara.name,
        r.vara.english_name,
        r.vara.lord.name()
    );
    println!(
        "Tithi:     {} {} ({}/30) {:.1}%  lord {}",
        r.tithi.paksha.name(),
        r.tithi.name,
        r.tithi.ordinal,
        r.tithi.percent_complete,
        r.tithi.lord
    );
    println!("           {}", span(&r.tithi.window));
    println!(
        "Nakshatra: {} pada {} ({}/27) {:.1}%  lord {}",
        r.nakshatra.name,
        r.nakshatra.pada,
        r.nakshatra.ordinal,
        r.nakshatra.percent_complete,
        r.nakshatra.lord.name()
    );
    println!("           {}", span(&r.nakshatra.window));
    println!(
        "Yoga:      {} ({}/27) {:.1}%{}",
        r.yoga.name,
        r.yoga.ordinal,
        r.yoga.percent_complete,
        if r.yoga.auspicious { "" } else { "  inauspicious" }
    );
    println!("           {}", span(&r.yoga.window));
    println!(
        "Karana:    {} ({}/11) {:.1}%",
        r.karana.name, r.karana.ordinal, r.karana.percent_complete
    );
    println!("           {}", span(&r.karana.window));

    println!();
    println!(
        "Sunrise {}  Sunset {}  Moonrise {}  Moonset {}",
        hm(r.sunrise.as_ref()),
        hm(r.sunset.as_ref()),
        hm(r.moonrise.as_ref()),
        hm(r.moonset.as_ref())
    );

    let c = &r.calendar;
    println!();
    println!(
        "{} ({}), {} paksha, {} ritu, {}",
        c.lunar_month_name,
        c.month_system.name(),
        c.paksha.name(),
        c.ritu.name(),
        c.ayana.name()
    );
    println!(
        "Vikram Samvat {}  Shaka {}  Samvatsara {} ({}/60)",
        c.vikram_samvat, c.shaka_samvat, c.samvatsara, c.samvatsara_order
    );
    println!("Sun in {}, Moon in {}", c.sun_rashi.name(), c.moon_rashi.name());
    if let Some(s) = &c.sankranti {
        println!("Sankranti: Sun enters {} at {}", s.name, format_hm(&s.time));
    }
    if !r.festivals.is_empty() {
        let names: Vec<&str> = r.festivals.iter().map(|f| f.name.as_str()).collect();
        println!("Festivals: {}", names.join(", "));
    }

    println!("\nMuhurtas:");
    for w in &r.muhurta_windows {
        println!(
            "  {:<14} {} - {}{}",
            w.label,
            format_hm(&w.start),
            format_hm(&w.end),
            if w.auspicious { "" } else { "  (avoid)" }
        );
    }

    println!("\nChoghadiya:");
    for c in &r.choghadiya {
        println!(
            "  {} {:<6} {:<7} {} - {}",
            if c.night { "night" } else { "day  " },
            c.name,
            c.quality.name(),
            format_hm(&c.start),
            format_hm(&c.end)
        );
    }

    println!(
        "\nAccuracy: {} ephemeris, {} ayanamsha, {} transitions (~{:.0} min)",
        r.accuracy.ephemeris,
        r.accuracy.ayanamsha,
        r.accuracy.transition.name(),
        r.accuracy.typical_error_minutes
    );
}

pub fn range(days: &[PanchangResult]) {
    if let Some(first) = days.first() {
        println!("Panchang at {}\n", place(first));
    }
    for r in days {
        let festivals: Vec<&str> = r.festivals.iter().map(|f| f.name.as_str()).collect();
        println!(
            "{} {:<9} {:<7} {:<13} {:<18} {} {} {}",
            r.date,
            r.vara.name,
            r.tithi.paksha.name(),
            r.tithi.name,
            r.nakshatra.name,
            hm(r.sunrise.as_ref()),
            hm(r.sunset.as_ref()),
            festivals.join(", ")
        );
    }
}

pub fn sun_times(t: &SunTimes) {
    println!("Sun on {} ({:?})", t.date, t.condition);
    println!("  Sunrise     {}", hm(t.sunrise.as_ref()));
    println!("  Solar noon  {}", format_hm(&t.solar_noon));
    println!("  Sunset      {}", hm(t.sunset.as_ref()));
    if let Some(len) = t.day_length_minutes {
        println!("  Day length  {}", format_duration_hm(len));
    }
    for e in &t.twilight {
        println!("  {:<18} {}", e.name, hm(e.time.as_ref()));
    }
    println!("  Moonrise    {}", hm(t.moonrise.as_ref()));
    println!("  Moonset     {}", hm(t.moonset.as_ref()));
}

pub fn period(instant: &DateTime<Tz>, p: &CurrentPeriod, good: bool) {
    println!("At {}", instant.format("%Y-%m-%d %H:%M %Z"));
    match &p.choghadiya {
        Some(c) => println!(
            "  Choghadiya {} ({}) {} - {}",
            c.name,
            c.quality.name(),
            format_hm(&c.start),
            format_hm(&c.end)
        ),
        None => println!("  Choghadiya --"),
    }
    match &p.hora {
        Some(h) => println!(
            "  Hora {}/24 {} {} - {}",
            h.number,
            h.lord.name(),
            format_hm(&h.start),
            format_hm(&h.end)
        ),
        None => println!("  Hora --"),
    }
    for w in &p.active {
        println!("  In {} until {}", w.label, format_hm(&w.end));
    }
    println!("  Good time: {}", if good { "yes" } else { "no" });
}

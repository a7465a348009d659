use report_pdf::report::axis::{
    AxisScale, DEGENERATE_POSITION, format_clock, format_value, label_stride, parse_clock,
    parse_date,
};

#[test]
fn stride_keeps_label_count_bounded() {
    assert_eq!(label_stride(12, 8), 2);
    assert_eq!(label_stride(8, 8), 1);
    assert_eq!(label_stride(17, 8), 3);
    assert_eq!(label_stride(0, 8), 1);
}

#[test]
fn clock_parsing_and_formatting() {
    assert_eq!(parse_clock("09:30"), Some(570.0));
    assert_eq!(parse_clock("18:00:30"), Some(1080.5));
    assert_eq!(parse_clock("25:00"), None);
    assert_eq!(parse_clock("noon"), None);
    assert_eq!(format_clock(570.0), "09:30");
}

#[test]
fn dates_ignore_time_part() {
    let day = parse_date("2024-03-01").unwrap();
    assert_eq!(parse_date("2024-03-01T12:00:00Z"), Some(day));
    assert_eq!(parse_date("2024-03-02"), Some(day + 1.0));
    assert_eq!(parse_date("03/01/2024"), None);
}

#[test]
fn value_labels_drop_needless_decimals() {
    assert_eq!(format_value(3.0), "3");
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(1.234), "1.23");
    assert_eq!(format_value(-4.0), "-4");
}

#[test]
fn zero_width_domain_maps_to_middle() {
    let linear = AxisScale::linear([-2.0, -2.0]).unwrap();
    assert_eq!(linear.normalize(-2.0), DEGENERATE_POSITION);

    let ordinal = AxisScale::ordinal(1, None);
    assert_eq!(ordinal.normalize(0.0), DEGENERATE_POSITION);

    let clock = AxisScale::clock([600.0]).unwrap();
    assert_eq!(clock.ticks(7).len(), 1);
}

#[test]
fn linear_scale_is_anchored_at_zero() {
    assert_eq!(
        AxisScale::linear([5.0, 10.0]),
        Some(AxisScale::Linear { min: 0.0, max: 10.0 })
    );
    assert_eq!(
        AxisScale::linear([-5.0, 10.0]),
        Some(AxisScale::Linear { min: -5.0, max: 10.0 })
    );
    assert_eq!(AxisScale::linear(std::iter::empty::<f64>()), None);

    let labels: Vec<String> = AxisScale::linear([60.0])
        .unwrap()
        .ticks(7)
        .into_iter()
        .map(|t| t.label)
        .collect();
    assert_eq!(labels, ["0", "10", "20", "30", "40", "50", "60"]);
}

#[test]
fn clock_ticks_use_whole_minutes() {
    let ticks = AxisScale::clock([540.0, 600.0]).unwrap().ticks(7);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        labels,
        ["09:00", "09:10", "09:20", "09:30", "09:40", "09:50", "10:00"]
    );
    assert_eq!(ticks[0].position, 0.0);
    assert_eq!(ticks[6].position, 1.0);
}

#[test]
fn calendar_labels_include_year_across_years() {
    let days = [
        parse_date("2023-12-30").unwrap(),
        parse_date("2024-01-02").unwrap(),
    ];
    let ticks = AxisScale::calendar(days).unwrap().ticks(8);
    assert_eq!(ticks[0].label, "2023-12-30");
    assert_eq!(ticks.last().unwrap().label, "2024-01-02");

    let same_year = AxisScale::calendar([parse_date("2024-05-01").unwrap()]).unwrap();
    assert_eq!(same_year.ticks(8)[0].label, "May 01");
}

#[test]
fn ordinal_ticks_thin_indices_but_not_categories() {
    let indexed: Vec<String> = AxisScale::ordinal(12, None)
        .ticks(8)
        .into_iter()
        .map(|t| t.label)
        .collect();
    assert_eq!(indexed, ["P1", "P3", "P5", "P7", "P9", "P11"]);

    let names: Vec<String> = (1..=12).map(|i| format!("C{i}")).collect();
    let ticks = AxisScale::ordinal(12, Some(names)).ticks(8);
    assert_eq!(ticks.len(), 12);
    assert_eq!(ticks[11].label, "C12");
    assert_eq!(ticks[11].position, 1.0);
}

#[test]
fn default_titles() {
    assert_eq!(AxisScale::ordinal(3, None).title(), "Data Points");
    assert_eq!(
        AxisScale::ordinal(3, Some(vec!["a".into()])).title(),
        "Category"
    );
    assert_eq!(AxisScale::clock([1.0]).unwrap().title(), "Time");
    assert_eq!(AxisScale::calendar([1.0]).unwrap().title(), "Date");
    assert_eq!(AxisScale::linear([1.0]).unwrap().title(), "Value");
}

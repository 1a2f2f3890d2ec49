use bvr_select::common::BvrBox;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn intersection_and_union_are_symmetric() {
    let pairs = [
        (BvrBox::new(1., 1., 2., 2.), BvrBox::new(2., 2., 2., 2.)),
        (BvrBox::new(0., 0., 4., 2.), BvrBox::new(1., 0.5, 1., 1.)),
        (BvrBox::new(-3., 4., 2., 6.), BvrBox::new(10., 10., 1., 1.)),
    ];

    for (a, b) in pairs {
        assert_close(a.intersect(&b), b.intersect(&a));
        assert_close(a.union(&b), b.union(&a));
    }
}

#[test]
fn iou_of_box_with_itself_is_one() {
    let a = BvrBox::new(3., 5., 2., 4.);
    assert_eq!(a.iou(&a), 1.);
}

#[test]
fn iou_stays_within_unit_interval() {
    let boxes = [
        BvrBox::new(0., 0., 2., 2.),
        BvrBox::new(0.5, 0.5, 2., 2.),
        BvrBox::new(5., 5., 3., 1.),
        BvrBox::new(-1., -1., 0.5, 0.5),
    ];

    for a in &boxes {
        for b in &boxes {
            let iou = a.iou(b);
            assert!((0. ..=1.).contains(&iou), "iou {iou} out of range");
        }
    }
}

#[test]
fn disjoint_boxes_do_not_intersect() {
    let a = BvrBox::new(0., 0., 2., 2.);
    let b = BvrBox::new(10., 10., 2., 2.);

    assert_eq!(a.intersect(&b), 0.);
    assert_eq!(a.iou(&b), 0.);
    assert_close(a.union(&b), a.area() + b.area());
}

#[test]
fn touching_boxes_have_zero_overlap() {
    // Edges meet exactly at x = 1.
    let a = BvrBox::new(0., 0., 2., 2.);
    let b = BvrBox::new(2., 0., 2., 2.);

    assert_eq!(BvrBox::overlap_1d(a.x, a.w, b.x, b.w), 0.);
    assert_eq!(a.intersect(&b), 0.);
}

#[test]
fn separated_intervals_overlap_negative() {
    assert!(BvrBox::overlap_1d(0., 1., 5., 1.) < 0.);
}

#[test]
fn zero_area_boxes_yield_zero_iou() {
    let degenerate = BvrBox::new(1., 1., 0., 0.);
    assert_eq!(degenerate.iou(&degenerate), 0.);

    let real = BvrBox::new(1., 1., 2., 2.);
    assert_eq!(degenerate.iou(&real), 0.);
}

#[test]
fn compare_score_sorts_highest_first() {
    let mut boxes = vec![
        BvrBox::new(0., 0., 1., 1.).with_score(0.3),
        BvrBox::new(0., 0., 1., 1.).with_score(0.9),
        BvrBox::new(0., 0., 1., 1.).with_score(0.5),
    ];
    boxes.sort_by(BvrBox::compare_score);

    let scores: Vec<f32> = boxes.iter().map(|b| b.score).collect();
    assert_eq!(scores, vec![0.9, 0.5, 0.3]);
}

#[test]
fn center_coordinate_accessors() {
    let b = BvrBox::default()
        .with_cxcy_wh(4., 6., 2., 4.)
        .with_class_id(3)
        .with_cell_id(7);

    assert_eq!(b.x_min(), 3.);
    assert_eq!(b.x_max(), 5.);
    assert_eq!(b.y_min(), 4.);
    assert_eq!(b.y_max(), 8.);
    assert_eq!(b.area(), 8.);
    assert_eq!(b.class_id, 3);
    assert_eq!(b.cell_id, 7);
}

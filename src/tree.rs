use eframe::egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }
}

pub type Segment = (Point, Point);

/// Current slider values, owned by the app and passed in on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParams {
    pub size: f32,
    pub depth: u32,
    pub x_offset: f32,
    pub y_offset: f32,
}

/// Builds the whole tree for the given surface dimensions and returns the
/// segments in draw order (pre-order, left branch first).
pub fn render(params: &TreeParams, width: f32, height: f32) -> Vec<Segment> {
    let base_left = Point::new(width / 2.0 - params.size / 2.0, height);
    let base_right = Point::new(width / 2.0 + params.size / 2.0, height);

    let mut segments = Vec::new();
    draw_subtree(base_left, base_right, params.depth, params, &mut segments);
    segments
}

fn draw_subtree(
    base_left: Point,
    base_right: Point,
    remaining_depth: u32,
    params: &TreeParams,
    out: &mut Vec<Segment>,
) {
    let (top_left, top_right) = emit_rectangle(base_left, base_right, out);

    if remaining_depth == 0 {
        return;
    }

    // The apex depends only on the top edge and the offsets, so one
    // computation serves both branches.
    let apex = apex_point(top_left, top_right, params.x_offset, params.y_offset);
    draw_subtree(top_left, apex, remaining_depth - 1, params, out);
    draw_subtree(apex, top_right, remaining_depth - 1, params, out);
}

// Erects a rectangle on the base segment, extending away from the surface
// bottom, and emits its four sides: bottom, right, left, top. The top corners
// become the next level's base.
fn emit_rectangle(base_left: Point, base_right: Point, out: &mut Vec<Segment>) -> (Point, Point) {
    out.push((base_left, base_right));

    let vec_right = Point::new(base_left.y - base_right.y, base_left.x - base_right.x);
    let top_right = Point::new(base_right.x - vec_right.x, base_right.y + vec_right.y);
    out.push((base_right, top_right));

    let vec_left = Point::new(base_right.y - base_left.y, -(base_right.x - base_left.x));
    let top_left = Point::new(base_left.x + vec_left.x, base_left.y + vec_left.y);
    out.push((base_left, top_left));

    out.push((top_left, top_right));

    (top_left, top_right)
}

// Midpoint of the top edge plus the 90°-rotated half-edge (the apex of a
// right isosceles triangle), displaced by the global offsets.
fn apex_point(top_left: Point, top_right: Point, x_offset: f32, y_offset: f32) -> Point {
    let middle = Point::new(
        top_left.x + (top_right.x - top_left.x) / 2.0,
        top_left.y + (top_right.y - top_left.y) / 2.0,
    );

    let orthogonal = Point::new(-(middle.y - top_right.y), middle.x - top_right.x);

    Point::new(
        middle.x + orthogonal.x - x_offset,
        middle.y + orthogonal.y - y_offset,
    )
}

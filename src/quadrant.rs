use crate::error::SplitError;

/// Pixel bounds of one tile. `left`/`top` are inclusive, `right`/`bottom`
/// exclusive, origin at the top-left corner of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// One cell of the 2x2 grid, addressed by row and column in {0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadrant {
    pub row: u32,
    pub col: u32,
    pub rect: CropRect,
}

impl Quadrant {
    /// `story_1.jpg` through `story_4.jpg`, numbered left to right, top to
    /// bottom.
    pub fn file_name(&self) -> String {
        format!("story_{}.jpg", self.row * 2 + self.col + 1)
    }
}

/// Computes the four crop rectangles for a source of the given dimensions.
///
/// Slice sizes use floor division, so an odd width or height leaves the last
/// column or row of pixels outside every rectangle. That matches how the tool
/// has always cut tiles; callers wanting the full frame must pad the source.
pub fn quadrants(width: u32, height: u32) -> Result<[Quadrant; 4], SplitError> {
    if width == 0 || height == 0 {
        return Err(SplitError::EmptyImage { width, height });
    }

    let w_slice = width / 2;
    let h_slice = height / 2;

    let cell = |row: u32, col: u32| Quadrant {
        row,
        col,
        rect: CropRect {
            left: col * w_slice,
            top: row * h_slice,
            right: (col + 1) * w_slice,
            bottom: (row + 1) * h_slice,
        },
    };

    Ok([cell(0, 0), cell(0, 1), cell(1, 0), cell(1, 1)])
}

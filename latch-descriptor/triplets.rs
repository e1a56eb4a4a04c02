//! Learned sample arrangement for the 512-bit LATCH descriptor.

/// Scale at which the offsets below were learned
pub const REFERENCE_SCALE: f32 = 7.0;

/// One record per descriptor bit, each holding an x triple and a y triple
pub const TRIPLET_COUNT: usize = 512;

/// Relative centers of the three sample patches that decide one bit,
/// stored as `[ax, bx, cx, ay, by, cy]`.
pub type Triplet = [f32; 6];

/// Offsets for patches A, B and C of every bit, in fragment order.
///
/// Values are whole pixels in [-24, 24] at [`REFERENCE_SCALE`].
pub static TRIPLETS: [Triplet; TRIPLET_COUNT] = [
    [-5.0, -16.0, -9.0, 1.0, 16.0, -21.0],
    [-7.0, -10.0, -3.0, 16.0, -14.0, 9.0],
    [11.0, 7.0, 3.0, 6.0, 15.0, -11.0],
    [-22.0, -12.0, -22.0, 2.0, 12.0, 21.0],
    [17.0, 2.0, 14.0, -10.0, 10.0, -18.0],
    [22.0, -2.0, 23.0, -14.0, -20.0, 5.0],
    [4.0, 24.0, 4.0, 16.0, -11.0, -21.0],
    [13.0, 19.0, 23.0, -6.0, 19.0, -4.0],
    [22.0, 1.0, -10.0, 7.0, -8.0, 6.0],
    [-5.0, 19.0, -6.0, 18.0, 11.0, -16.0],
    [12.0, 24.0, 20.0, -9.0, 20.0, -20.0],
    [-3.0, 5.0, 10.0, -14.0, -21.0, 19.0],
    [-3.0, -17.0, -5.0, 9.0, -1.0, -19.0],
    [7.0, 22.0, 13.0, -2.0, -23.0, 20.0],
    [19.0, -1.0, 15.0, 12.0, -19.0, -9.0],
    [-19.0, -2.0, -22.0, 2.0, -9.0, 24.0],
    [-2.0, -11.0, -3.0, -21.0, -18.0, 7.0],
    [23.0, 4.0, 17.0, 8.0, 7.0, -19.0],
    [16.0, 10.0, 20.0, 18.0, -23.0, 4.0],
    [-6.0, -1.0, 6.0, 22.0, -11.0, -14.0],
    [-24.0, 15.0, -23.0, -15.0, -14.0, -11.0],
    [24.0, 18.0, 14.0, -13.0, -14.0, -19.0],
    [-17.0, -11.0, -21.0, 10.0, -12.0, -17.0],
    [19.0, 3.0, -2.0, -4.0, 8.0, 19.0],
    [-18.0, -8.0, -18.0, -3.0, -15.0, 5.0],
    [-6.0, 1.0, -6.0, -13.0, 16.0, 23.0],
    [-22.0, -4.0, -15.0, -8.0, -5.0, 20.0],
    [9.0, -6.0, 10.0, 13.0, -23.0, 15.0],
    [20.0, 11.0, 9.0, 12.0, -24.0, 22.0],
    [-19.0, -1.0, -20.0, -4.0, 5.0, 2.0],
    [-24.0, 15.0, -19.0, 4.0, -16.0, -5.0],
    [-23.0, -11.0, -16.0, 10.0, 5.0, 19.0],
    [-3.0, -22.0, -7.0, 5.0, 23.0, -22.0],
    [-15.0, -9.0, -21.0, 2.0, 21.0, 20.0],
    [-18.0, 16.0, -12.0, 11.0, -10.0, 4.0],
    [2.0, 14.0, 6.0, -7.0, -13.0, 20.0],
    [3.0, 23.0, 5.0, 15.0, -23.0, -9.0],
    [1.0, -1.0, -3.0, 8.0, -4.0, 7.0],
    [-22.0, -1.0, 16.0, 16.0, 19.0, -12.0],
    [14.0, 9.0, 19.0, -12.0, 13.0, 12.0],
    [21.0, -22.0, 15.0, 2.0, -17.0, 3.0],
    [0.0, 11.0, 8.0, 5.0, -22.0, 18.0],
    [-15.0, 13.0, -18.0, 9.0, 3.0, -17.0],
    [-12.0, 8.0, -21.0, 10.0, 5.0, -18.0],
    [19.0, 0.0, -12.0, 17.0, 18.0, -7.0],
    [-14.0, 1.0, -12.0, -20.0, -7.0, -2.0],
    [24.0, 3.0, -16.0, 15.0, -22.0, 7.0],
    [-17.0, 24.0, -24.0, 13.0, -14.0, -24.0],
    [-7.0, -4.0, -1.0, -23.0, 10.0, 20.0],
    [-8.0, -1.0, -5.0, -13.0, 20.0, -22.0],
    [13.0, 16.0, 0.0, -22.0, 16.0, -14.0],
    [-10.0, 0.0, -9.0, 12.0, -9.0, -16.0],
    [20.0, -2.0, 19.0, 15.0, -19.0, -15.0],
    [-19.0, 22.0, -14.0, 19.0, 23.0, -2.0],
    [-24.0, 10.0, -8.0, 16.0, -3.0, -1.0],
    [-22.0, 18.0, -23.0, -15.0, 23.0, 21.0],
    [9.0, 9.0, 21.0, 10.0, -23.0, -24.0],
    [-17.0, 12.0, -12.0, -19.0, -23.0, -8.0],
    [19.0, 0.0, -18.0, 17.0, -16.0, -19.0],
    [-19.0, -7.0, -14.0, 21.0, 20.0, 3.0],
    [20.0, 8.0, 17.0, -2.0, 0.0, -10.0],
    [-15.0, 6.0, -21.0, 24.0, 2.0, -22.0],
    [-18.0, 8.0, -24.0, 12.0, 19.0, -14.0],
    [16.0, -13.0, 24.0, -1.0, -16.0, -18.0],
    [23.0, 4.0, 20.0, -1.0, -10.0, 22.0],
    [22.0, 2.0, 16.0, -14.0, -22.0, 11.0],
    [-14.0, 24.0, -9.0, -19.0, -16.0, -6.0],
    [11.0, 0.0, -20.0, -5.0, 24.0, -12.0],
    [17.0, -9.0, 18.0, 16.0, 1.0, -15.0],
    [15.0, -24.0, 24.0, -10.0, 16.0, 11.0],
    [5.0, -3.0, 4.0, 3.0, -16.0, -2.0],
    [9.0, -15.0, 7.0, 19.0, -18.0, -19.0],
    [11.0, -5.0, 14.0, 6.0, 22.0, -10.0],
    [-8.0, 17.0, -19.0, -3.0, 24.0, 17.0],
    [13.0, 24.0, 9.0, 16.0, -20.0, -4.0],
    [7.0, 16.0, 8.0, -6.0, 11.0, 1.0],
    [3.0, 18.0, 20.0, 23.0, 15.0, -24.0],
    [22.0, 2.0, -12.0, 15.0, 18.0, -10.0],
    [-15.0, 11.0, -13.0, 13.0, 9.0, 9.0],
    [-10.0, 17.0, -13.0, -9.0, 13.0, -13.0],
    [22.0, -11.0, 20.0, 15.0, 7.0, -9.0],
    [18.0, -11.0, 17.0, 0.0, 16.0, 11.0],
    [22.0, -19.0, 24.0, -18.0, -3.0, -15.0],
    [22.0, -5.0, 19.0, 20.0, 16.0, -23.0],
    [21.0, 0.0, -17.0, 14.0, -8.0, 2.0],
    [9.0, 2.0, 7.0, 0.0, 3.0, 12.0],
    [7.0, -12.0, 13.0, 18.0, 8.0, -24.0],
    [-5.0, -15.0, -22.0, -11.0, -10.0, 9.0],
    [19.0, 20.0, 24.0, 24.0, 6.0, -11.0],
    [-10.0, 2.0, -17.0, 6.0, -2.0, -21.0],
    [19.0, 21.0, 21.0, -17.0, 21.0, -13.0],
    [-11.0, -20.0, -9.0, 3.0, -5.0, -8.0],
    [-3.0, -7.0, -1.0, -20.0, 23.0, -9.0],
    [-3.0, 22.0, -1.0, 21.0, -12.0, 3.0],
    [-19.0, 2.0, -24.0, -4.0, -3.0, 17.0],
    [-16.0, 2.0, -19.0, 10.0, 1.0, 20.0],
    [-9.0, -20.0, -17.0, 21.0, -17.0, 22.0],
    [-18.0, -9.0, -12.0, 7.0, 19.0, -5.0],
    [22.0, 8.0, 11.0, 6.0, -7.0, 22.0],
    [-24.0, 5.0, -24.0, 10.0, -15.0, -20.0],
    [10.0, -22.0, 9.0, 20.0, -4.0, -20.0],
    [-24.0, 0.0, -23.0, 6.0, -13.0, -15.0],
    [22.0, -3.0, 19.0, -20.0, 24.0, 5.0],
    [10.0, -1.0, 8.0, -23.0, -9.0, -5.0],
    [-9.0, 23.0, -22.0, -6.0, 0.0, 13.0],
    [-9.0, 23.0, -17.0, -7.0, -13.0, -20.0],
    [20.0, -21.0, 22.0, 7.0, 15.0, -5.0],
    [24.0, -24.0, 12.0, 24.0, 22.0, -12.0],
    [16.0, -18.0, 9.0, -13.0, 11.0, -6.0],
    [-10.0, 2.0, 18.0, -9.0, 15.0, 18.0],
    [-18.0, 1.0, -24.0, 3.0, 24.0, 20.0],
    [-23.0, -22.0, -17.0, 6.0, -12.0, 7.0],
    [-19.0, -18.0, -2.0, -18.0, 22.0, 13.0],
    [-22.0, 4.0, -22.0, 24.0, 8.0, 2.0],
    [7.0, 10.0, 20.0, -12.0, 19.0, 21.0],
    [-18.0, 3.0, -16.0, -7.0, 8.0, 5.0],
    [-20.0, 4.0, -17.0, -14.0, -9.0, -8.0],
    [-7.0, -20.0, -20.0, -6.0, 18.0, -3.0],
    [0.0, 4.0, 18.0, 4.0, -8.0, -8.0],
    [-15.0, 1.0, -17.0, -18.0, -22.0, 10.0],
    [8.0, 21.0, 24.0, 13.0, 17.0, -3.0],
    [14.0, 6.0, 17.0, 10.0, -24.0, -10.0],
    [-22.0, 12.0, -18.0, 8.0, -8.0, 23.0],
    [-13.0, 21.0, -15.0, -8.0, 18.0, 11.0],
    [20.0, 7.0, 5.0, 17.0, 7.0, -24.0],
    [-7.0, 1.0, 9.0, -12.0, 14.0, 17.0],
    [16.0, -24.0, 24.0, 11.0, -2.0, 21.0],
    [10.0, -15.0, 21.0, 9.0, 15.0, 16.0],
    [-10.0, 14.0, -22.0, 3.0, -11.0, 8.0],
    [22.0, -22.0, 14.0, -13.0, 4.0, 3.0],
    [-1.0, 23.0, -2.0, 21.0, -14.0, -17.0],
    [16.0, -7.0, 19.0, -7.0, -23.0, 6.0],
    [21.0, -15.0, 6.0, -22.0, 6.0, -4.0],
    [11.0, -1.0, -10.0, 7.0, -21.0, -4.0],
    [-10.0, -2.0, -13.0, -23.0, 23.0, 5.0],
    [-21.0, 18.0, -8.0, -24.0, 11.0, 5.0],
    [-18.0, 23.0, -21.0, -24.0, -16.0, 16.0],
    [-8.0, 19.0, -23.0, 6.0, -13.0, 23.0],
    [-24.0, -16.0, -1.0, -23.0, 13.0, -11.0],
    [-23.0, 12.0, -24.0, -10.0, 1.0, 2.0],
    [-14.0, 2.0, -20.0, -20.0, -11.0, 24.0],
    [-1.0, 20.0, -6.0, -4.0, -22.0, -19.0],
    [12.0, 13.0, 15.0, 2.0, -16.0, 1.0],
    [11.0, -24.0, 24.0, 13.0, 10.0, 21.0],
    [-10.0, 8.0, -13.0, -12.0, 10.0, 24.0],
    [23.0, -13.0, 16.0, 10.0, -14.0, 10.0],
    [0.0, -21.0, 0.0, 22.0, 20.0, 18.0],
    [24.0, -13.0, 18.0, 7.0, 7.0, 19.0],
    [-10.0, -24.0, -13.0, -24.0, -20.0, -5.0],
    [19.0, 0.0, 21.0, -4.0, 21.0, 16.0],
    [0.0, -13.0, -2.0, -15.0, 24.0, 9.0],
    [-12.0, -10.0, -6.0, 19.0, 6.0, -16.0],
    [-10.0, -4.0, -14.0, 4.0, -22.0, -8.0],
    [24.0, -18.0, 20.0, -7.0, 24.0, -1.0],
    [18.0, -8.0, 23.0, 7.0, 3.0, -11.0],
    [-20.0, -11.0, -5.0, -6.0, 17.0, -19.0],
    [12.0, 1.0, 12.0, 0.0, -11.0, -16.0],
    [22.0, -2.0, -24.0, -1.0, -3.0, 22.0],
    [17.0, -7.0, 17.0, 17.0, 17.0, -12.0],
    [-22.0, -17.0, -6.0, -6.0, 14.0, 11.0],
    [-11.0, -4.0, -2.0, -13.0, -9.0, -18.0],
    [-24.0, 12.0, -16.0, 16.0, -5.0, 13.0],
    [-20.0, 15.0, -14.0, 23.0, -10.0, -16.0],
    [21.0, -18.0, 12.0, 13.0, 0.0, -12.0],
    [-18.0, -20.0, -18.0, 14.0, -22.0, 12.0],
    [-16.0, 3.0, -17.0, 21.0, -3.0, -15.0],
    [12.0, 15.0, 5.0, 15.0, -19.0, 4.0],
    [15.0, -16.0, 17.0, -8.0, 20.0, 23.0],
    [-21.0, 7.0, -7.0, 19.0, -2.0, 1.0],
    [-22.0, 21.0, -21.0, 13.0, 19.0, -10.0],
    [9.0, 21.0, 6.0, 0.0, -23.0, -24.0],
    [-24.0, 4.0, -24.0, 13.0, 16.0, -13.0],
    [-8.0, 15.0, -11.0, -18.0, 23.0, 23.0],
    [18.0, 2.0, 15.0, 10.0, 23.0, 6.0],
    [-14.0, 22.0, -21.0, -14.0, 9.0, 17.0],
    [3.0, -24.0, -2.0, -12.0, 0.0, -3.0],
    [18.0, -9.0, 19.0, 18.0, 7.0, 17.0],
    [20.0, -20.0, 11.0, -11.0, 0.0, 4.0],
    [5.0, 11.0, 18.0, -7.0, -22.0, -5.0],
    [-15.0, 24.0, -17.0, -23.0, 22.0, 18.0],
    [-23.0, -15.0, -7.0, -5.0, -14.0, 11.0],
    [-3.0, 3.0, -4.0, -7.0, 17.0, -13.0],
    [19.0, -2.0, 17.0, -19.0, 24.0, 1.0],
    [2.0, 8.0, 11.0, -21.0, 20.0, -12.0],
    [22.0, -9.0, 8.0, 11.0, -14.0, -4.0],
    [-19.0, 20.0, -22.0, 2.0, -14.0, 23.0],
    [9.0, -24.0, 9.0, -17.0, -22.0, 17.0],
    [6.0, -1.0, -4.0, -21.0, 0.0, 18.0],
    [8.0, -9.0, 12.0, -13.0, -23.0, 13.0],
    [7.0, -13.0, 16.0, -2.0, 5.0, -5.0],
    [-19.0, 9.0, -10.0, -23.0, 23.0, 9.0],
    [1.0, 24.0, 4.0, -17.0, -24.0, 3.0],
    [10.0, -2.0, 12.0, -5.0, -1.0, 15.0],
    [22.0, 6.0, -6.0, 11.0, 20.0, -9.0],
    [24.0, 8.0, -7.0, -22.0, 23.0, -10.0],
    [3.0, 5.0, 2.0, 8.0, -6.0, 14.0],
    [13.0, -10.0, 7.0, -12.0, 11.0, 11.0],
    [16.0, -7.0, 21.0, -13.0, -7.0, -12.0],
    [9.0, 14.0, 5.0, -8.0, 18.0, -9.0],
    [12.0, -2.0, 8.0, -22.0, 13.0, 21.0],
    [3.0, -3.0, -10.0, -1.0, -2.0, 19.0],
    [-13.0, 7.0, -21.0, -8.0, -5.0, -17.0],
    [16.0, -4.0, 18.0, -14.0, -22.0, 17.0],
    [13.0, 23.0, 12.0, 2.0, -2.0, 5.0],
    [-12.0, -4.0, -14.0, 1.0, 9.0, -2.0],
    [-17.0, 6.0, -12.0, 22.0, -9.0, -13.0],
    [-9.0, 22.0, -24.0, 2.0, -1.0, -10.0],
    [-14.0, -23.0, -13.0, 14.0, 6.0, -3.0],
    [-23.0, 7.0, -23.0, -12.0, 12.0, 16.0],
    [-6.0, 4.0, 3.0, 20.0, 22.0, -20.0],
    [5.0, 14.0, 3.0, -15.0, 12.0, -13.0],
    [19.0, -11.0, 24.0, -22.0, -12.0, -20.0],
    [9.0, -12.0, 16.0, 17.0, 21.0, 24.0],
    [-20.0, -10.0, -14.0, -9.0, 16.0, -21.0],
    [-7.0, -23.0, -4.0, -20.0, 10.0, -8.0],
    [18.0, -14.0, 20.0, 6.0, 24.0, 10.0],
    [-2.0, 4.0, 10.0, -21.0, -16.0, -2.0],
    [-18.0, -11.0, -15.0, -12.0, 14.0, -21.0],
    [14.0, -15.0, 18.0, -7.0, -17.0, -2.0],
    [12.0, -1.0, 20.0, 18.0, 0.0, 7.0],
    [-13.0, -12.0, -17.0, 14.0, 23.0, 18.0],
    [21.0, -5.0, 24.0, -7.0, -15.0, -6.0],
    [1.0, 16.0, -5.0, 1.0, 9.0, 18.0],
    [22.0, -4.0, 22.0, 3.0, 18.0, 8.0],
    [-10.0, 6.0, -16.0, 9.0, 4.0, -24.0],
    [5.0, -4.0, -18.0, -18.0, -12.0, -24.0],
    [-16.0, -6.0, -19.0, -19.0, 18.0, 23.0],
    [19.0, -23.0, 23.0, -4.0, -10.0, -13.0],
    [13.0, -6.0, 19.0, 8.0, 19.0, -6.0],
    [8.0, -17.0, 12.0, -17.0, 0.0, 22.0],
    [8.0, 7.0, 22.0, 22.0, -22.0, -22.0],
    [22.0, -19.0, 19.0, -23.0, -17.0, 16.0],
    [0.0, 21.0, 13.0, 12.0, 21.0, -22.0],
    [-19.0, -15.0, -12.0, 3.0, -16.0, 1.0],
    [-1.0, 22.0, -1.0, -24.0, 19.0, 13.0],
    [-9.0, 14.0, -6.0, 7.0, 24.0, -1.0],
    [-18.0, -11.0, -18.0, -3.0, -22.0, -5.0],
    [-13.0, 1.0, 15.0, 9.0, 18.0, 7.0],
    [-5.0, 10.0, 24.0, 12.0, -24.0, 22.0],
    [-7.0, 0.0, -1.0, -15.0, 3.0, 24.0],
    [21.0, -23.0, 19.0, -16.0, -5.0, 8.0],
    [18.0, -12.0, 14.0, 18.0, -16.0, -5.0],
    [-20.0, 16.0, -20.0, 19.0, -2.0, -19.0],
    [-20.0, 22.0, -23.0, -13.0, 21.0, -3.0],
    [19.0, -16.0, 23.0, -19.0, 24.0, 7.0],
    [-19.0, -1.0, 18.0, 5.0, 20.0, 15.0],
    [13.0, 22.0, 24.0, -11.0, 3.0, -14.0],
    [-19.0, 14.0, -23.0, -9.0, 12.0, 17.0],
    [-6.0, 14.0, -9.0, -1.0, -22.0, -9.0],
    [19.0, -1.0, -21.0, -18.0, 23.0, -10.0],
    [22.0, 17.0, 14.0, 1.0, -12.0, -23.0],
    [7.0, 0.0, -3.0, -8.0, 8.0, 21.0],
    [24.0, -2.0, 24.0, 2.0, -6.0, -12.0],
    [8.0, 2.0, 9.0, 14.0, -3.0, 6.0],
    [-10.0, -3.0, -11.0, -24.0, 18.0, -5.0],
    [-12.0, -20.0, -7.0, 12.0, -5.0, -6.0],
    [-17.0, -2.0, -17.0, -21.0, -15.0, -15.0],
    [5.0, 21.0, 9.0, -15.0, -23.0, -12.0],
    [-10.0, 10.0, -8.0, 10.0, 4.0, 7.0],
    [23.0, -3.0, 9.0, 4.0, 11.0, 4.0],
    [-1.0, -9.0, -21.0, -21.0, 22.0, -4.0],
    [-12.0, 19.0, -15.0, -3.0, -24.0, 0.0],
    [-24.0, -8.0, -19.0, 9.0, 17.0, -7.0],
    [20.0, -16.0, 21.0, -24.0, -11.0, 19.0],
    [11.0, -21.0, 19.0, -14.0, 23.0, -21.0],
    [23.0, -9.0, 20.0, 7.0, 17.0, -6.0],
    [-18.0, -5.0, 5.0, 21.0, -17.0, 11.0],
    [-3.0, -15.0, -21.0, -16.0, -13.0, 11.0],
    [14.0, -2.0, -20.0, 3.0, 2.0, -17.0],
    [-16.0, 19.0, -12.0, -21.0, -3.0, 15.0],
    [21.0, 19.0, 5.0, 20.0, -6.0, -1.0],
    [21.0, 9.0, 1.0, 12.0, 23.0, -9.0],
    [9.0, -6.0, 22.0, 7.0, 6.0, 0.0],
    [4.0, 14.0, 23.0, -21.0, -4.0, 18.0],
    [-6.0, -12.0, -23.0, -24.0, -13.0, 9.0],
    [14.0, 22.0, 6.0, 21.0, -19.0, -9.0],
    [-2.0, -8.0, -5.0, 22.0, -16.0, 23.0],
    [-3.0, 23.0, -3.0, 19.0, 10.0, -18.0],
    [-22.0, 7.0, -19.0, 21.0, 12.0, -12.0],
    [-9.0, 23.0, -16.0, -6.0, -24.0, 7.0],
    [1.0, 6.0, 14.0, 21.0, 15.0, -3.0],
    [4.0, -2.0, -11.0, 18.0, 10.0, 20.0],
    [3.0, 23.0, 23.0, -20.0, -13.0, 23.0],
    [11.0, 21.0, 20.0, -12.0, 19.0, -8.0],
    [14.0, 14.0, 13.0, -4.0, 22.0, -14.0],
    [14.0, 23.0, 10.0, -12.0, 7.0, 21.0],
    [2.0, 4.0, 11.0, -20.0, -13.0, -11.0],
    [14.0, 8.0, 16.0, -13.0, 24.0, -14.0],
    [-9.0, 17.0, -13.0, -8.0, -3.0, 21.0],
    [-17.0, 4.0, -17.0, 16.0, 0.0, 24.0],
    [-22.0, -15.0, -1.0, 18.0, -24.0, 8.0],
    [-16.0, -7.0, -14.0, -10.0, 22.0, 5.0],
    [1.0, 11.0, -1.0, -24.0, -9.0, 10.0],
    [7.0, -12.0, 14.0, 9.0, -4.0, 18.0],
    [21.0, 15.0, 5.0, -3.0, -23.0, -5.0],
    [16.0, 8.0, 18.0, 24.0, -11.0, 23.0],
    [17.0, -1.0, 18.0, -12.0, 13.0, 19.0],
    [-18.0, 10.0, -14.0, 12.0, -14.0, 24.0],
    [-4.0, -5.0, -9.0, 20.0, 12.0, 20.0],
    [16.0, -5.0, 15.0, -8.0, -20.0, -7.0],
    [-24.0, 5.0, -16.0, 10.0, -11.0, -6.0],
    [-21.0, 12.0, -24.0, -15.0, 14.0, -15.0],
    [21.0, -1.0, 19.0, 6.0, -5.0, 19.0],
    [24.0, 12.0, 3.0, 10.0, 12.0, -15.0],
    [-22.0, 1.0, -17.0, -13.0, -4.0, 4.0],
    [19.0, -8.0, 22.0, -12.0, 14.0, -23.0],
    [11.0, -9.0, 16.0, -4.0, -10.0, 2.0],
    [-24.0, -8.0, 5.0, 21.0, -21.0, 14.0],
    [14.0, -21.0, 22.0, -11.0, -8.0, -22.0],
    [-23.0, -1.0, 19.0, -5.0, -11.0, 13.0],
    [13.0, 5.0, 4.0, -12.0, 18.0, -24.0],
    [-13.0, 2.0, -14.0, 22.0, 9.0, 19.0],
    [13.0, -15.0, 9.0, 22.0, 19.0, -17.0],
    [-3.0, 4.0, -3.0, 5.0, -2.0, -14.0],
    [11.0, 2.0, 4.0, -21.0, -15.0, 2.0],
    [-17.0, -5.0, -16.0, -1.0, 15.0, -20.0],
    [15.0, 0.0, 7.0, -7.0, -20.0, 0.0],
    [-2.0, 23.0, -1.0, 12.0, -19.0, -10.0],
    [-3.0, 13.0, 19.0, -18.0, 15.0, -23.0],
    [-21.0, 5.0, -19.0, 10.0, 3.0, 18.0],
    [-17.0, 9.0, -16.0, -12.0, 19.0, 24.0],
    [-20.0, -1.0, -24.0, -24.0, -22.0, -9.0],
    [12.0, -16.0, 18.0, -5.0, -19.0, -6.0],
    [-12.0, 10.0, -8.0, -23.0, 8.0, -11.0],
    [17.0, -8.0, 15.0, 21.0, -13.0, 11.0],
    [11.0, 24.0, 11.0, 14.0, -23.0, 6.0],
    [15.0, 7.0, 19.0, 22.0, -23.0, 14.0],
    [-4.0, 21.0, -2.0, 18.0, 7.0, 5.0],
    [23.0, 24.0, 10.0, 10.0, -24.0, 10.0],
    [-14.0, -4.0, -21.0, 24.0, 3.0, 2.0],
    [2.0, 24.0, 6.0, -6.0, 7.0, 24.0],
    [14.0, -16.0, 18.0, -8.0, -15.0, 11.0],
    [-21.0, -8.0, -20.0, 0.0, 14.0, 23.0],
    [-23.0, 11.0, -24.0, 22.0, 7.0, 22.0],
    [7.0, 24.0, 9.0, 19.0, 0.0, 23.0],
    [14.0, -6.0, 20.0, -9.0, 7.0, -23.0],
    [20.0, 9.0, 13.0, 1.0, 9.0, 21.0],
    [-11.0, -1.0, 9.0, -11.0, 15.0, 23.0],
    [8.0, -9.0, 23.0, 2.0, 10.0, 21.0],
    [-19.0, 4.0, -19.0, -22.0, -2.0, 20.0],
    [14.0, 20.0, 19.0, -23.0, 1.0, 23.0],
    [12.0, -1.0, -15.0, 22.0, 13.0, -18.0],
    [24.0, -5.0, 21.0, 11.0, 6.0, 12.0],
    [11.0, -2.0, 12.0, 5.0, 15.0, 7.0],
    [-16.0, 10.0, -15.0, -13.0, 10.0, 17.0],
    [-18.0, -15.0, -19.0, -5.0, 3.0, 8.0],
    [12.0, 12.0, 14.0, -9.0, 20.0, -12.0],
    [-13.0, -23.0, -22.0, -18.0, -8.0, 13.0],
    [15.0, -22.0, 16.0, -18.0, 18.0, 14.0],
    [7.0, 23.0, 20.0, -9.0, 2.0, -16.0],
    [-17.0, -7.0, -24.0, -23.0, 9.0, 23.0],
    [9.0, -5.0, 5.0, -22.0, -16.0, -11.0],
    [-22.0, -11.0, -20.0, 11.0, -2.0, 14.0],
    [11.0, 8.0, 16.0, -24.0, 18.0, -14.0],
    [17.0, 1.0, -6.0, 12.0, 7.0, 18.0],
    [4.0, 8.0, 7.0, -19.0, 4.0, 18.0],
    [-10.0, -1.0, -19.0, 19.0, -23.0, -23.0],
    [-1.0, 23.0, 1.0, 5.0, 13.0, -24.0],
    [-16.0, 14.0, -19.0, -19.0, 21.0, -22.0],
    [-9.0, -23.0, -9.0, 5.0, 16.0, 3.0],
    [12.0, 21.0, 13.0, 11.0, 15.0, 23.0],
    [-21.0, 23.0, -21.0, -12.0, -24.0, -17.0],
    [-14.0, -8.0, -5.0, -21.0, 13.0, -1.0],
    [17.0, 24.0, 10.0, 19.0, -4.0, 6.0],
    [21.0, -24.0, 13.0, -22.0, -2.0, -8.0],
    [23.0, -16.0, 21.0, -6.0, -5.0, -15.0],
    [-12.0, 14.0, -11.0, -8.0, -6.0, 5.0],
    [-5.0, 9.0, 16.0, 9.0, -23.0, 24.0],
    [12.0, -24.0, 22.0, 8.0, 19.0, 2.0],
    [-10.0, 0.0, 18.0, 23.0, 3.0, -22.0],
    [-19.0, 3.0, -12.0, -20.0, 15.0, 6.0],
    [-23.0, 19.0, -23.0, 5.0, -3.0, 23.0],
    [24.0, 8.0, 4.0, 10.0, 24.0, -3.0],
    [8.0, 15.0, 7.0, -23.0, -2.0, 20.0],
    [19.0, 18.0, 23.0, 4.0, -24.0, 6.0],
    [-9.0, -23.0, -6.0, 16.0, -2.0, 2.0],
    [10.0, 7.0, 12.0, -1.0, 21.0, 7.0],
    [-6.0, 2.0, 20.0, 16.0, 5.0, 6.0],
    [11.0, 3.0, -4.0, -14.0, 9.0, -12.0],
    [13.0, -17.0, 11.0, -22.0, 23.0, 15.0],
    [11.0, 1.0, 17.0, 22.0, 4.0, -3.0],
    [18.0, -9.0, 21.0, 11.0, -14.0, -23.0],
    [-9.0, 14.0, -14.0, -3.0, 14.0, 4.0],
    [12.0, -4.0, 21.0, 0.0, -24.0, 16.0],
    [-21.0, 6.0, -16.0, -15.0, -23.0, -20.0],
    [14.0, -22.0, 0.0, -20.0, -13.0, 1.0],
    [7.0, -12.0, 13.0, 0.0, -15.0, -11.0],
    [16.0, 0.0, 10.0, 17.0, -1.0, 21.0],
    [14.0, 2.0, -9.0, -18.0, 24.0, -5.0],
    [-12.0, 23.0, -10.0, -6.0, 8.0, 9.0],
    [16.0, 0.0, -14.0, 24.0, -10.0, -16.0],
    [-21.0, -14.0, -23.0, 12.0, -21.0, 13.0],
    [-21.0, 21.0, -21.0, -24.0, 2.0, -15.0],
    [1.0, 19.0, 13.0, 8.0, 8.0, -23.0],
    [-8.0, 6.0, 17.0, -19.0, -24.0, 7.0],
    [-24.0, 18.0, -21.0, 10.0, 20.0, -24.0],
    [3.0, 11.0, -4.0, 0.0, 22.0, -12.0],
    [8.0, 5.0, 18.0, -3.0, 17.0, 10.0],
    [-21.0, 18.0, -21.0, 18.0, -22.0, -6.0],
    [-9.0, 2.0, -5.0, 24.0, -17.0, 4.0],
    [2.0, 6.0, 5.0, 5.0, -24.0, 21.0],
    [20.0, -24.0, 5.0, -17.0, 16.0, -3.0],
    [-10.0, -2.0, 5.0, 5.0, -22.0, -9.0],
    [-3.0, -13.0, -21.0, -12.0, 4.0, 23.0],
    [6.0, 8.0, 3.0, 24.0, 13.0, -8.0],
    [5.0, 19.0, 11.0, -6.0, 10.0, 22.0],
    [-18.0, 17.0, -18.0, -10.0, -18.0, 10.0],
    [20.0, 21.0, 21.0, 17.0, -3.0, 18.0],
    [-23.0, 15.0, -19.0, 2.0, -21.0, -10.0],
    [-16.0, 22.0, -18.0, -18.0, 2.0, 22.0],
    [2.0, 0.0, 5.0, 19.0, -8.0, 7.0],
    [5.0, -21.0, 4.0, 4.0, -14.0, 2.0],
    [-16.0, 1.0, 18.0, 19.0, 15.0, 4.0],
    [-15.0, -2.0, -20.0, -6.0, -18.0, -8.0],
    [-19.0, -7.0, 0.0, -21.0, 10.0, -23.0],
    [-15.0, 1.0, -16.0, 22.0, 7.0, 0.0],
    [20.0, 12.0, 22.0, -12.0, 18.0, 1.0],
    [23.0, 14.0, 13.0, -2.0, 23.0, -2.0],
    [5.0, 16.0, 3.0, -1.0, -7.0, 9.0],
    [-11.0, 11.0, -13.0, -11.0, -20.0, -23.0],
    [-22.0, 9.0, -20.0, 2.0, -23.0, -3.0],
    [2.0, -1.0, 17.0, 3.0, 24.0, 19.0],
    [-11.0, 1.0, -24.0, 3.0, 20.0, 20.0],
    [-15.0, -8.0, -20.0, 12.0, -14.0, -11.0],
    [20.0, -8.0, 19.0, -14.0, -14.0, 9.0],
    [-24.0, 15.0, -8.0, -22.0, 9.0, -4.0],
    [22.0, 0.0, 0.0, -7.0, 24.0, -3.0],
    [19.0, -17.0, 23.0, -17.0, 1.0, 11.0],
    [-24.0, 3.0, -16.0, -18.0, 15.0, -7.0],
    [10.0, -10.0, 9.0, 0.0, 23.0, 4.0],
    [9.0, 2.0, 15.0, 9.0, -20.0, -23.0],
    [16.0, 11.0, 7.0, -19.0, 8.0, 23.0],
    [17.0, -14.0, 21.0, -17.0, -18.0, -14.0],
    [-10.0, 11.0, -10.0, -24.0, 2.0, 13.0],
    [24.0, 7.0, -2.0, 15.0, -3.0, 11.0],
    [-20.0, 18.0, -9.0, 21.0, 4.0, -7.0],
    [-5.0, -18.0, -23.0, 10.0, -6.0, 11.0],
    [9.0, 0.0, 13.0, -1.0, -24.0, -12.0],
    [17.0, 10.0, 1.0, -1.0, -23.0, 15.0],
    [24.0, -8.0, 24.0, -2.0, -4.0, 14.0],
    [-18.0, 0.0, 18.0, 6.0, -24.0, -23.0],
    [16.0, -19.0, 11.0, -9.0, -18.0, -1.0],
    [-24.0, -5.0, -23.0, -3.0, 22.0, 15.0],
    [-23.0, 0.0, -19.0, -15.0, 9.0, 12.0],
    [3.0, -11.0, 3.0, -10.0, 22.0, -21.0],
    [-3.0, -21.0, -14.0, -15.0, -20.0, 19.0],
    [22.0, 8.0, 1.0, -21.0, -11.0, 23.0],
    [-9.0, -4.0, -10.0, -17.0, -9.0, -2.0],
    [15.0, 20.0, 9.0, 20.0, -24.0, 3.0],
    [-16.0, 19.0, -19.0, -16.0, 0.0, -21.0],
    [17.0, 12.0, 8.0, 9.0, -12.0, 11.0],
    [19.0, -23.0, 12.0, 12.0, 2.0, 0.0],
    [24.0, -11.0, 24.0, -16.0, -22.0, -19.0],
    [18.0, 1.0, -7.0, -2.0, 5.0, -23.0],
    [10.0, 23.0, 2.0, -21.0, 1.0, -10.0],
    [15.0, -24.0, 16.0, -11.0, 4.0, 1.0],
    [16.0, -20.0, 14.0, -13.0, -6.0, 13.0],
    [12.0, 15.0, 10.0, 6.0, -12.0, -20.0],
    [-23.0, 13.0, -18.0, -5.0, 21.0, 1.0],
    [-19.0, -7.0, -23.0, -1.0, -21.0, -15.0],
    [-21.0, -9.0, -18.0, -8.0, -7.0, -15.0],
    [0.0, 18.0, -2.0, -17.0, -12.0, 10.0],
    [-22.0, -2.0, 19.0, 21.0, -14.0, 22.0],
    [24.0, 6.0, 18.0, 1.0, 21.0, -19.0],
    [14.0, -14.0, 15.0, 12.0, 3.0, 17.0],
    [-14.0, -3.0, 4.0, -13.0, 5.0, 12.0],
    [12.0, 22.0, 24.0, -11.0, -9.0, -23.0],
    [0.0, 11.0, 11.0, 9.0, -20.0, 1.0],
    [12.0, 12.0, 18.0, 16.0, -4.0, 9.0],
    [19.0, -2.0, -23.0, -17.0, 11.0, 22.0],
    [15.0, 13.0, 22.0, -4.0, 17.0, -3.0],
    [-9.0, 11.0, -13.0, -2.0, -14.0, -5.0],
    [5.0, -12.0, 14.0, -4.0, 18.0, -12.0],
    [21.0, 2.0, -19.0, 8.0, -23.0, 8.0],
    [-10.0, 0.0, 8.0, -17.0, 12.0, 19.0],
    [18.0, 2.0, 10.0, -18.0, -21.0, 13.0],
    [13.0, -3.0, 19.0, 4.0, -19.0, 1.0],
    [-21.0, 8.0, -24.0, -10.0, -1.0, -23.0],
    [18.0, 9.0, 9.0, 9.0, 20.0, 3.0],
    [-11.0, 18.0, -5.0, -24.0, -23.0, 3.0],
    [-15.0, 17.0, -19.0, -13.0, 12.0, 19.0],
    [13.0, 3.0, 13.0, -14.0, -15.0, -23.0],
    [10.0, -23.0, 16.0, -10.0, -2.0, 16.0],
    [-14.0, -23.0, -6.0, -21.0, 19.0, -6.0],
    [-5.0, -14.0, -2.0, 21.0, -8.0, 11.0],
    [13.0, 16.0, 15.0, 6.0, -24.0, 14.0],
    [-21.0, -8.0, -1.0, -21.0, 1.0, 14.0],
    [19.0, 14.0, 9.0, -19.0, 5.0, 21.0],
    [8.0, -18.0, 17.0, -6.0, 12.0, 1.0],
    [-19.0, 14.0, -21.0, -11.0, -13.0, 23.0],
    [12.0, -3.0, 9.0, -18.0, -17.0, -14.0],
    [12.0, 21.0, 19.0, 16.0, -11.0, 19.0],
    [-23.0, -3.0, 14.0, 22.0, -24.0, 20.0],
    [-7.0, 13.0, -18.0, -5.0, -18.0, -23.0],
    [-22.0, -9.0, -10.0, -15.0, -18.0, 16.0],
    [-5.0, -12.0, -4.0, 18.0, 10.0, -16.0],
    [9.0, -15.0, 17.0, -10.0, 6.0, 16.0],
    [16.0, -1.0, -20.0, -6.0, -7.0, -20.0],
    [-24.0, -18.0, -13.0, -1.0, 8.0, -2.0],
    [16.0, 6.0, 18.0, -22.0, 11.0, -12.0],
    [4.0, -15.0, 1.0, 16.0, -20.0, 6.0],
    [17.0, 2.0, 21.0, 23.0, 15.0, -4.0],
    [21.0, -24.0, 13.0, 3.0, 21.0, 8.0],
    [-4.0, 4.0, -12.0, -1.0, 19.0, -7.0],
    [11.0, 5.0, -2.0, -12.0, -21.0, -13.0],
    [-19.0, -11.0, -20.0, 20.0, -2.0, -24.0],
    [11.0, -1.0, -3.0, 20.0, -4.0, -23.0],
    [11.0, -1.0, 14.0, 2.0, 7.0, -2.0],
    [-16.0, -1.0, -17.0, 23.0, -8.0, -14.0],
    [21.0, 6.0, 10.0, -15.0, 19.0, -24.0],
    [15.0, 12.0, 1.0, -23.0, -6.0, 11.0],
    [-19.0, 19.0, -18.0, 17.0, 0.0, -8.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_whole_pixels_within_reach() {
        for t in TRIPLETS.iter() {
            for &v in t {
                assert_eq!(v, v.trunc());
                assert!((-24.0..=24.0).contains(&v), "offset {} out of range", v);
            }
        }
    }

    #[test]
    fn test_first_and_last_records() {
        assert_eq!(TRIPLETS[0], [-5.0, -16.0, -9.0, 1.0, 16.0, -21.0]);
        assert_eq!(TRIPLETS[TRIPLET_COUNT - 1], [-19.0, 19.0, -18.0, 17.0, 0.0, -8.0]);
    }
}

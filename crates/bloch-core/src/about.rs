//! Text for the About screen.

/// Gate reference and usage limits.
pub const ABOUT: &str = "\
Single qubit rotations on the Bloch sphere

Gates:
  X   flips the state of the qubit
  Y   rotates the state vector about the y-axis by PI
  Z   flips the phase by PI radians
  RX  parameterized rotation about the x-axis
  RY  parameterized rotation about the y-axis
  RZ  parameterized rotation about the z-axis
  S   rotates the state vector about the z-axis by PI/2
  SD  rotates the state vector about the z-axis by -PI/2
  T   rotates the state vector about the z-axis by PI/4
  TD  rotates the state vector about the z-axis by -PI/4
  H   creates an equal superposition

For RX, RY and RZ the angle is one of +-PI/4, +-PI/2, +-PI, +-2*PI,
so theta always lies in [-2*PI, 2*PI].

At most ten operations can be visualized at one time.
If the visualizer cannot render the sequence, the window closes.
";

/// Logistic function `1 / (1 + e^-z)`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Derivative of the sigmoid, evaluated at the pre-activation `z`.
pub fn sigmoid_prime(z: f64) -> f64 {
    let fz = sigmoid(z);
    fz * (1.0 - fz)
}

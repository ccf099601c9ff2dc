quantity!(Kilowatts, f64, "kW");

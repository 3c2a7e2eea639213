/// Run an expression as a named stage, logging how long it took.
#[macro_export]
macro_rules! stage {
  ($name:expr, $($tail:tt)*) => {
    {
      log::info!("* {}", $name);
      let now = std::time::Instant::now();
      let value = $($tail)*;
      log::info!("Done  `{}` ({} ms)", $name, now.elapsed().as_millis());
      log::info!("");
      value
    }
  };
}

fn main() -> anyhow::Result<()> {
    modsort_lib::main()
}
